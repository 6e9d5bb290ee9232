use flatframe::{Group, Packet};

flatframe::group! {
    pub group Status(status) {
        Code: u8,
    }
}

fn main() {
    const SIZE: usize = Status::SIZE;
    let mut buffer = [0u8; SIZE];
    let mut packet = Packet::<Status, _>::from_array(&mut buffer);
    packet.inject(status::Code, 3);
    assert_eq!(packet.extract(status::Code), 3);
}
