flatframe::group! {
    pub group Sample(sample) {
        A: u16,
    }
}

fn main() {
    let mut buffer = [0u8; 2];
    let mut packet = flatframe::Packet::<sample::Sample, _>::from_array(&mut buffer);
    packet.inject(sample::A, "five");
}
