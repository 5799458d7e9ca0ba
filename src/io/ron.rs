//! RON I/O
use crate::error::{Error, Result};
use crate::traits::{ConvertToSerializable, RONExport, RONImport};

impl<T: ConvertToSerializable> RONExport for T {
    fn to_ron_string(&self) -> Result<String> {
        ron::to_string(&self.to_serializable()).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<T: ConvertToSerializable> RONImport for T {
    fn from_ron_string(s: &str) -> Result<Self> {
        let s = ron::from_str(s).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::from_serializable(s)
    }
}
