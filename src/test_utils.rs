//! Sample layouts shared by unit tests and benchmarks.
//!
//! The `Foo*` layouts reproduce the reference byte scenario used throughout
//! the test suite: a 20-byte frame of three groups whose fields are filled
//! with repeating byte patterns (`0x11`, `0x22`, ...). `Telemetry` is a more
//! realistic frame mixing signed, floating-point, array and boolean fields.

#![cfg(any(test, feature = "benchmark"))]

crate::group! {
    /// Two fields, 6 bytes.
    pub group FooGroup1(foo1) {
        A: u16,
        B: u32,
    }
}

crate::group! {
    /// Three fields, 10 bytes, with an 8-byte field at an odd offset.
    pub group FooGroup2(foo2) {
        C: u8,
        D: u64,
        E: u8,
    }
}

crate::group! {
    /// One field, 4 bytes.
    pub group FooGroup3(foo3) {
        F: u32,
    }
}

crate::frame! {
    /// `FooGroup1`, `FooGroup2` and `FooGroup3` back to back, 20 bytes.
    pub frame FooFrame {
        FooGroup1,
        FooGroup2,
        FooGroup3,
    }
}

crate::group! {
    /// Powertrain readings.
    pub group Engine(engine) {
        Rpm: u16,
        Temperature: i16,
        Throttle: f32,
    }
}

crate::group! {
    /// Vehicle body readings.
    pub group Chassis(chassis) {
        Speed: f32,
        Acceleration: [f32; 3],
        OnGround: bool,
    }
}

crate::frame! {
    /// `Engine` followed by `Chassis`, 25 bytes.
    pub frame Telemetry {
        Engine,
        Chassis,
    }
}

/// Fill every field of `frame` with the reference byte patterns.
pub fn fill_foo_frame<B: AsRef<[u8]> + AsMut<[u8]>>(frame: &mut crate::Frame<FooFrame, B>) {
    frame.inject(foo1::A, 0x1111);
    frame.inject(foo1::B, 0x2222_2222);
    frame.inject(foo2::C, 0x33);
    frame.inject(foo2::D, 0x4444_4444_4444_4444);
    frame.inject(foo2::E, 0x55);
    frame.inject(foo3::F, 0x6666_6666);
}

/// Bytes of a [`FooFrame`] after [`fill_foo_frame`].
pub const FOO_FRAME_BYTES: [u8; 20] = [
    0x11, 0x11, 0x22, 0x22, 0x22, 0x22, 0x33, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44,
    0x55, 0x66, 0x66, 0x66, 0x66,
];
