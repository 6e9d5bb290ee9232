//! Dynamic by-name view over a laid-out buffer.
//!
//! This view resolves fields through a [`LayoutSchema`] at runtime. It is
//! intended for exploration, tooling and diagnostics, e.g. decoding a buffer
//! from a schema loaded out of YAML. For hot paths, prefer [`Frame`](crate::Frame)
//! or [`Packet`](crate::Packet), which resolve offsets at compile time.

use crate::layout::bounds::check_capacity;
use crate::types::{FieldValue, Value};
use crate::{LayoutError, LayoutSchema, Result};

/// A read-only view over a buffer, supporting by-name lookups.
#[derive(Debug, Clone, Copy)]
pub struct DynamicView<'a> {
    data: &'a [u8],
    schema: &'a LayoutSchema,
}

impl<'a> DynamicView<'a> {
    /// Bind `data` to `schema`, validating the schema and the buffer's capacity.
    pub fn new(data: &'a [u8], schema: &'a LayoutSchema) -> Result<Self> {
        schema.validate()?;
        check_capacity(&schema.name, data.len(), schema.size)?;
        Ok(Self { data, schema })
    }

    /// Decode a field into a dynamic [`Value`].
    pub fn value(&self, path: &str) -> Result<Value> {
        let info = self.schema.field(path)?;
        Value::read(&self.data[info.offset..], info.value_type, info.count)
    }

    /// Generic typed lookup by field path.
    ///
    /// Fails with [`LayoutError::TypeConversion`] unless `T` has exactly the
    /// field's value type and element count.
    pub fn get<T: FieldValue>(&self, path: &str) -> Result<T> {
        let info = self.schema.field(path)?;
        if info.value_type != T::VALUE_TYPE || info.count != T::COUNT {
            return Err(LayoutError::TypeConversion {
                details: format!(
                    "Field '{}' holds {} x {:?}, requested {} x {:?}",
                    info.qualified_name(),
                    info.count,
                    info.value_type,
                    T::COUNT,
                    T::VALUE_TYPE
                ),
            });
        }

        Ok(T::read_from(&self.data[info.offset..info.offset + info.size]))
    }

    /// Qualified names of every field, in physical order.
    pub fn field_names(&self) -> Vec<String> {
        self.schema.fields.iter().map(|field| field.qualified_name()).collect()
    }

    /// Schema driving this view.
    pub fn schema(&self) -> &LayoutSchema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameLayout;
    use crate::test_utils::{Telemetry, chassis, engine};
    use crate::Frame;

    fn sample_frame() -> Vec<u8> {
        let mut buffer = vec![0u8; Telemetry::SIZE];
        let mut frame = Frame::<Telemetry, _>::new(&mut buffer).unwrap();
        frame.inject(engine::Rpm, 4200);
        frame.inject(engine::Temperature, -12);
        frame.inject(engine::Throttle, 0.75);
        frame.inject(chassis::Speed, 42.5);
        frame.inject(chassis::Acceleration, [0.5, -1.0, 9.81]);
        frame.inject(chassis::OnGround, true);
        buffer
    }

    #[test]
    fn dynamic_view_basic_lookup() {
        let data = sample_frame();
        let schema = Telemetry::schema();
        let view = DynamicView::new(&data, &schema).unwrap();

        assert_eq!(view.get::<u16>("Engine.Rpm").unwrap(), 4200);
        assert_eq!(view.get::<i16>("Temperature").unwrap(), -12);
        assert!((view.get::<f32>("Chassis.Speed").unwrap() - 42.5).abs() < 1e-5);
        assert_eq!(view.get::<[f32; 3]>("Acceleration").unwrap(), [0.5, -1.0, 9.81]);
        assert_eq!(view.value("OnGround").unwrap(), Value::Bool(true));
        assert_eq!(
            view.value("Chassis.Acceleration").unwrap(),
            Value::Array(vec![Value::Float32(0.5), Value::Float32(-1.0), Value::Float32(9.81)])
        );
    }

    #[test]
    fn dynamic_view_rejects_mismatched_types() {
        let data = sample_frame();
        let schema = Telemetry::schema();
        let view = DynamicView::new(&data, &schema).unwrap();

        assert!(matches!(view.get::<u32>("Engine.Rpm"), Err(LayoutError::TypeConversion { .. })));
        assert!(matches!(view.get::<[f32; 2]>("Acceleration"), Err(LayoutError::TypeConversion { .. })));
        assert!(matches!(view.value("Missing"), Err(LayoutError::FieldNotFound { .. })));
    }

    #[test]
    fn dynamic_view_rejects_short_buffers() {
        let schema = Telemetry::schema();
        let data = vec![0u8; Telemetry::SIZE - 1];
        assert!(matches!(DynamicView::new(&data, &schema), Err(LayoutError::BufferTooSmall { .. })));
    }

    #[test]
    fn dynamic_view_from_reloaded_yaml_schema() {
        let data = sample_frame();
        let schema = LayoutSchema::from_yaml(&Telemetry::schema().to_yaml().unwrap()).unwrap();
        let view = DynamicView::new(&data, &schema).unwrap();

        assert_eq!(view.field_names().first().map(String::as_str), Some("Engine.Rpm"));
        assert_eq!(view.field_names().len(), view.schema().field_count());
        assert_eq!(view.get::<bool>("Chassis.OnGround").unwrap(), true);
    }
}
