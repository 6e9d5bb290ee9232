//! Integration tests for frames bound to caller-supplied buffers.
//!
//! Exercises the public API only: declaration macros, `Frame`/`Packet`
//! binding, the raw group accessors, and schema-driven inspection.

use anyhow::{Result, ensure};
use flatframe::{
    DynamicView, Frame, FrameLayout, Group, LayoutError, LayoutSchema, Packet, Value, ValueType,
};

flatframe::group! {
    pub group Identity(identity) {
        Serial: u16,
        Version: u32,
    }
}

flatframe::group! {
    pub group Measurement(measurement) {
        Channel: u8,
        Reading: u64,
        Quality: u8,
    }
}

flatframe::group! {
    pub group Trailer(trailer) {
        Crc: u32,
    }
}

flatframe::frame! {
    pub frame Record {
        Identity,
        Measurement,
        Trailer,
    }
}

const RECORD_BYTES: [u8; 20] = [
    0x11, 0x11, 0x22, 0x22, 0x22, 0x22, 0x33, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44,
    0x55, 0x66, 0x66, 0x66, 0x66,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("flatframe=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn record_layout_constants() {
    assert_eq!(Identity::SIZE, 6);
    assert_eq!(Measurement::SIZE, 10);
    assert_eq!(Trailer::SIZE, 4);
    assert_eq!(Record::SIZE, 20);

    assert_eq!(Record::offset(identity::Version), 2);
    assert_eq!(Record::offset(measurement::Channel), 6);
    assert_eq!(Record::offset(measurement::Reading), 7);
    assert_eq!(Record::offset(measurement::Quality), 15);
    assert_eq!(Record::offset(trailer::Crc), 16);
}

#[test]
fn inject_produces_reference_bytes() -> Result<()> {
    init_tracing();

    let mut buffer = vec![0u8; Record::SIZE];
    let mut frame = Frame::<Record, _>::new(&mut buffer)?;
    frame.inject(identity::Serial, 0x1111);
    frame.inject(identity::Version, 0x2222_2222);
    frame.inject(measurement::Channel, 0x33);
    frame.inject(measurement::Reading, 0x4444_4444_4444_4444);
    frame.inject(measurement::Quality, 0x55);
    frame.inject(trailer::Crc, 0x6666_6666);

    ensure!(buffer == RECORD_BYTES, "unexpected bytes: {buffer:02x?}");
    Ok(())
}

#[test]
fn extract_reads_reference_bytes() -> Result<()> {
    let frame = Frame::<Record, _>::new(RECORD_BYTES)?;

    ensure!(frame.extract(identity::Serial) == 0x1111);
    ensure!(frame.extract(identity::Version) == 0x2222_2222);
    ensure!(frame.extract(measurement::Channel) == 0x33);
    ensure!(frame.extract(measurement::Reading) == 0x4444_4444_4444_4444);
    ensure!(frame.extract(measurement::Quality) == 0x55);
    ensure!(frame.extract(trailer::Crc) == 0x6666_6666);
    Ok(())
}

#[test]
fn capacity_is_validated_once_at_binding() -> Result<()> {
    init_tracing();

    let short = [0u8; 19];
    let err = Frame::<Record, _>::new(&short[..]).unwrap_err();
    assert_eq!(err, LayoutError::buffer_too_small("Record", 20, 19));
    assert!(!err.recovery_suggestions().is_empty());

    let roomy = [0u8; 32];
    let frame = Frame::<Record, _>::new(&roomy[..])?;
    ensure!(frame.has_valid_buffer_size());
    ensure!(frame.capacity() == 32);
    ensure!(frame.as_bytes().len() == Record::SIZE);
    Ok(())
}

#[test]
fn packets_bind_single_groups() -> Result<()> {
    let mut buffer = [0u8; 10];
    let mut packet = Packet::<Measurement, _>::new(&mut buffer[..])?;
    packet.inject(measurement::Reading, u64::MAX);
    ensure!(packet.extract(measurement::Reading) == u64::MAX);
    ensure!(packet.extract(measurement::Channel) == 0);
    ensure!(buffer[1..9] == [0xffu8; 8]);
    Ok(())
}

#[test]
fn raw_group_access_at_frame_base() -> Result<()> {
    let mut buffer = [0u8; 20];
    let base = Record::offset(measurement::Channel);
    Measurement::inject(&mut buffer, measurement::Reading, 0x4444_4444_4444_4444, base)?;
    ensure!(buffer[7..15] == [0x44u8; 8]);

    let value = Measurement::extract(&buffer, measurement::Reading, base)?;
    ensure!(value == 0x4444_4444_4444_4444);

    let err = Measurement::extract(&buffer, measurement::Quality, 12).unwrap_err();
    ensure!(matches!(err, LayoutError::OutOfBounds { offset: 21, size: 1, buffer_len: 20 }));
    Ok(())
}

#[test]
fn schema_describes_record() -> Result<()> {
    let schema = Record::schema();
    let reading = schema.field("Measurement.Reading")?;
    ensure!(reading.offset == 7);
    ensure!(reading.value_type == ValueType::UInt64);

    let reloaded = LayoutSchema::from_yaml(&schema.to_yaml()?)?;
    ensure!(reloaded == schema);

    let view = DynamicView::new(&RECORD_BYTES, &reloaded)?;
    let crc: u32 = view.get("Crc")?;
    ensure!(crc == 0x6666_6666);
    let serial = view.value("Identity.Serial")?;
    ensure!(serial == Value::UInt16(0x1111), "unexpected serial {serial:?}");
    ensure!(view.field_names().len() == 6);
    Ok(())
}
