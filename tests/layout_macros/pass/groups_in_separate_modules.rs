mod left {
    flatframe::group! {
        pub group Left(fields) {
            Value: u32,
        }
    }
}

mod right {
    flatframe::group! {
        pub group Right(fields) {
            Value: u32,
        }
    }
}

flatframe::frame! {
    pub frame Both {
        left::Left,
        right::Right,
    }
}

fn main() {
    use flatframe::{Frame, FrameLayout};

    let mut buffer = [0u8; 8];
    let mut frame = Frame::<Both, _>::from_array(&mut buffer);
    frame.inject(left::fields::Value, 1);
    frame.inject(right::fields::Value, 2);
    assert_eq!(frame.extract(left::fields::Value), 1);
    assert_eq!(frame.extract(right::fields::Value), 2);
    assert_eq!(Both::offset(right::fields::Value), 4);
}
