//! Per-node port storage handed to node callbacks.

use crate::error::PortError;
use crate::port::{NodeSignature, PortType, PortValue, Value};

/// Input and output slots of one node instance.
///
/// Slots are indexed in signature order. An input slot is `None` while
/// nothing is connected to it; an output slot is `None` until the node sets
/// it during the current evaluation.
#[derive(Debug, Clone)]
pub struct NodeArguments {
    input_types: Vec<PortType>,
    output_types: Vec<PortType>,
    inputs: Vec<Option<Value>>,
    outputs: Vec<Option<Value>>,
}

impl NodeArguments {
    /// Empty slots shaped after `signature`.
    #[must_use]
    pub fn new(signature: &NodeSignature) -> Self {
        Self {
            input_types: signature.inputs.clone(),
            output_types: signature.outputs.clone(),
            inputs: vec![None; signature.inputs.len()],
            outputs: vec![None; signature.outputs.len()],
        }
    }

    /// Read input `index` as `T`. `Ok(None)` means the input is unset.
    ///
    /// # Errors
    ///
    /// [`PortError`] if the index is out of range or the port is not
    /// declared as `T`.
    pub fn input<T: PortValue>(&self, index: usize) -> Result<Option<T>, PortError> {
        check(&self.input_types, index, T::PORT_TYPE)?;
        Ok(self.inputs[index].as_ref().and_then(T::from_value))
    }

    /// Returns `true` if input `index` currently holds a value.
    #[must_use]
    pub fn is_input_set(&self, index: usize) -> bool {
        matches!(self.inputs.get(index), Some(Some(_)))
    }

    /// Write a value into input `index`, or clear it with `None`.
    ///
    /// # Errors
    ///
    /// [`PortError`] if the index or the value's type does not match the
    /// signature.
    pub fn set_input(&mut self, index: usize, value: Option<Value>) -> Result<(), PortError> {
        if let Some(value) = &value {
            check(&self.input_types, index, value.port_type())?;
        } else {
            check_index(&self.input_types, index)?;
        }
        self.inputs[index] = value;
        Ok(())
    }

    /// Set output `index`.
    ///
    /// # Errors
    ///
    /// [`PortError`] if the index is out of range or the port is not
    /// declared as `T`.
    pub fn set_output<T: PortValue>(&mut self, index: usize, value: T) -> Result<(), PortError> {
        check(&self.output_types, index, T::PORT_TYPE)?;
        self.outputs[index] = Some(value.into_value());
        Ok(())
    }

    /// The value of output `index`, if it was set this evaluation.
    #[must_use]
    pub fn output(&self, index: usize) -> Option<Value> {
        self.outputs.get(index).copied().flatten()
    }

    /// Unset every output.
    pub fn clear_outputs(&mut self) {
        self.outputs.iter_mut().for_each(|slot| *slot = None);
    }
}

fn check_index(types: &[PortType], index: usize) -> Result<PortType, PortError> {
    types.get(index).copied().ok_or(PortError::Index {
        index,
        len: types.len(),
    })
}

fn check(types: &[PortType], index: usize, found: PortType) -> Result<(), PortError> {
    let expected = check_index(types, index)?;
    if expected != found {
        return Err(PortError::Type {
            index,
            expected,
            found,
        });
    }
    Ok(())
}
