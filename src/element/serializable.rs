//! Serializable description of an element
use super::TrimmedSerendipity;
use crate::error::{Error, Result};
use crate::traits::{ConvertToSerializable, ReferenceCell};
use crate::types::{ElementKind, EntityDofs};

/// The cell, degree, kind and entity dofs of an element
#[derive(serde::Serialize, Debug, serde::Deserialize)]
#[serde(bound = "C: serde::Serialize + serde::de::DeserializeOwned, D: Ord + serde::Serialize + serde::de::DeserializeOwned")]
pub struct SerializableElement<C, D: Ord> {
    cell: C,
    degree: usize,
    kind: ElementKind,
    entity_dofs: EntityDofs<D>,
}

impl<C> ConvertToSerializable for TrimmedSerendipity<C>
where
    C: ReferenceCell + Clone + serde::Serialize + serde::de::DeserializeOwned,
    C::Dim: serde::Serialize + serde::de::DeserializeOwned,
{
    type SerializableType = SerializableElement<C, C::Dim>;

    fn to_serializable(&self) -> SerializableElement<C, C::Dim> {
        SerializableElement {
            cell: self.cell.clone(),
            degree: self.degree,
            kind: self.kind,
            entity_dofs: self.entity_dofs.clone(),
        }
    }

    fn from_serializable(s: SerializableElement<C, C::Dim>) -> Result<Self> {
        let element = Self::new(s.cell, s.degree, s.kind)?;
        if element.entity_dofs != s.entity_dofs {
            return Err(Error::Serialization(format!(
                "stored entity dofs do not match a rebuilt {:?} element of degree {}",
                s.kind, s.degree
            )));
        }
        Ok(element)
    }
}
