use flatframe::{Frame, FrameLayout, Group, Packet};

flatframe::group! {
    group Hidden(hidden) {
        Count: u16,
        Ratio: f32,
    }
}

flatframe::group! {
    pub(crate) group Shared(shared) {
        Enabled: bool,
    }
}

flatframe::frame! {
    frame Private {
        Hidden,
        Shared,
    }
}

mod nested {
    flatframe::group! {
        pub(super) group Inner(inner) {
            Level: i8,
        }
    }
}

fn main() {
    assert_eq!(Hidden::SIZE, 6);
    assert_eq!(nested::Inner::SIZE, 1);
    assert_eq!(Private::SIZE, 7);

    let mut buffer = [0u8; 7];
    let mut frame = Frame::<Private, _>::from_array(&mut buffer);
    frame.inject(hidden::Ratio, 0.5);
    frame.inject(shared::Enabled, true);
    assert_eq!(frame.extract(hidden::Ratio), 0.5);
    assert!(frame.extract(shared::Enabled));

    let mut level = [0u8; 1];
    let mut packet = Packet::<nested::Inner, _>::from_array(&mut level);
    packet.inject(nested::inner::Level, -3);
    assert_eq!(packet.extract(nested::inner::Level), -3);
}
