flatframe::group! {
    pub group Inside(inside) {
        A: u16,
    }
}

flatframe::group! {
    pub group Outside(outside) {
        B: u16,
    }
}

flatframe::frame! {
    pub frame Only {
        Inside,
    }
}

fn main() {
    let mut buffer = [0u8; 2];
    let mut frame = flatframe::Frame::<Only, _>::from_array(&mut buffer);
    frame.inject(outside::B, 1);
}
