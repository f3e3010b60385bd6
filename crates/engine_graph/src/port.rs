//! Port types, port values, and node signatures.

use engine_component::Entity;

/// The type of a node input or output port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortType {
    /// A trigger with no data.
    Pulse,
    /// An [`Entity`] handle; may be null.
    Entity,
    /// A `bool`.
    Bool,
    /// An `i32`.
    Int,
    /// An `f32`.
    Float,
}

impl std::fmt::Display for PortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pulse => "pulse",
            Self::Entity => "entity",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
        };
        f.write_str(name)
    }
}

/// Marker payload of a [`PortType::Pulse`] port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulse;

/// A value travelling along a port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A fired trigger.
    Pulse,
    /// An entity handle.
    Entity(Entity),
    /// A boolean.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A 32-bit float.
    Float(f32),
}

impl Value {
    /// The port type this value fits.
    #[must_use]
    pub fn port_type(&self) -> PortType {
        match self {
            Self::Pulse => PortType::Pulse,
            Self::Entity(_) => PortType::Entity,
            Self::Bool(_) => PortType::Bool,
            Self::Int(_) => PortType::Int,
            Self::Float(_) => PortType::Float,
        }
    }
}

/// Rust types that can sit on a port.
pub trait PortValue: Sized {
    /// Port type this Rust type maps to.
    const PORT_TYPE: PortType;

    /// Wrap `self` for a port slot.
    fn into_value(self) -> Value;

    /// Unwrap a slot value, or `None` if it holds another type.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! port_value {
    ($ty:ty, $variant:ident) => {
        impl PortValue for $ty {
            const PORT_TYPE: PortType = PortType::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(*inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(inner: $ty) -> Self {
                Value::$variant(inner)
            }
        }
    };
}

port_value!(Entity, Entity);
port_value!(bool, Bool);
port_value!(i32, Int);
port_value!(f32, Float);

impl PortValue for Pulse {
    const PORT_TYPE: PortType = PortType::Pulse;

    fn into_value(self) -> Value {
        Value::Pulse
    }

    fn from_value(value: &Value) -> Option<Self> {
        matches!(value, Value::Pulse).then_some(Pulse)
    }
}

impl From<Pulse> for Value {
    fn from(_: Pulse) -> Self {
        Value::Pulse
    }
}

/// The ordered input and output port types of a node.
///
/// A signature is declared once per node type when it is registered and is
/// the contract graph authors wire against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSignature {
    /// Input port types, by index.
    pub inputs: Vec<PortType>,
    /// Output port types, by index.
    pub outputs: Vec<PortType>,
}

impl NodeSignature {
    /// A signature with no ports.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input port carrying `T`.
    pub fn add_input<T: PortValue>(&mut self) -> &mut Self {
        self.inputs.push(T::PORT_TYPE);
        self
    }

    /// Append an output port carrying `T`.
    pub fn add_output<T: PortValue>(&mut self) -> &mut Self {
        self.outputs.push(T::PORT_TYPE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_preserves_order() {
        let mut sig = NodeSignature::new();
        sig.add_input::<Pulse>().add_input::<Entity>().add_output::<i32>();
        assert_eq!(sig.inputs, vec![PortType::Pulse, PortType::Entity]);
        assert_eq!(sig.outputs, vec![PortType::Int]);
    }

    #[test]
    fn test_value_port_type() {
        assert_eq!(Value::from(true).port_type(), PortType::Bool);
        assert_eq!(Value::from(Entity::from_raw(1)).port_type(), PortType::Entity);
        assert_eq!(Value::from(Pulse).port_type(), PortType::Pulse);
    }

    #[test]
    fn test_from_value_rejects_other_types() {
        assert_eq!(bool::from_value(&Value::Int(1)), None);
        assert_eq!(i32::from_value(&Value::Int(1)), Some(1));
        assert_eq!(Pulse::from_value(&Value::Pulse), Some(Pulse));
    }
}
