flatframe::group! {
    pub group Broken(broken) {
        A: u16,
        A: u32,
    }
}

fn main() {}
