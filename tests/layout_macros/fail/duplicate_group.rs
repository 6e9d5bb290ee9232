flatframe::group! {
    pub group Single(single) {
        A: u16,
    }
}

flatframe::frame! {
    pub frame Twice {
        Single,
        Single,
    }
}

fn main() {}
