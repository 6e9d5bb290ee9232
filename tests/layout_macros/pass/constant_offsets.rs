use flatframe::{Contains, Field, FrameLayout, Group};

flatframe::group! {
    pub group Header(header) {
        Length: u16,
        Kind: u8,
    }
}

flatframe::group! {
    pub group Body(body) {
        Data: [u8; 16],
        Checksum: u32,
    }
}

flatframe::frame! {
    pub frame Datagram {
        Header,
        Body,
    }
}

const HEADER_SIZE: usize = Header::SIZE;
const CHECKSUM_OFFSET: usize = <Datagram as Contains<body::Id>>::BASE + <body::Checksum as Field>::OFFSET;
const TOTAL: usize = <Datagram as FrameLayout>::SIZE;

static STORAGE: [u8; TOTAL] = [0; TOTAL];

fn main() {
    assert_eq!(HEADER_SIZE, 3);
    assert_eq!(CHECKSUM_OFFSET, 19);
    assert_eq!(STORAGE.len(), 23);
}
