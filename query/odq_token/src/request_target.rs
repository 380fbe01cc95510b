//! Request target classification.

use std::fmt;

/// What kind of resource a request URI addresses.
///
/// Consumed by the recursive-descent parser layered above the lexers: once
/// a URI path and its query expressions are parsed, the result is mapped
/// onto one of these classifications to drive response shaping. The lexing
/// layer itself never produces a value of this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RequestTargetKind {
    /// The URI addresses nothing recognizable.
    Nothing,
    /// The service document (the bare service root).
    ServiceDocument,
    /// An entity set (a resource collection).
    EntitySet,
    /// A single entity.
    Entity,
    /// A singleton declared in the service container.
    Singleton,
    /// A structural property of complex type.
    ComplexProperty,
    /// A structural property of primitive type.
    Primitive,
    /// A raw primitive value (`$value` on a primitive property).
    PrimitiveValue,
    /// A dynamic property of an open type.
    OpenProperty,
    /// The `$metadata` document.
    Metadata,
    /// The `$batch` endpoint.
    Batch,
    /// An entity reference (`$ref`).
    Reference,
    /// A media resource stream.
    MediaResource,
}

impl RequestTargetKind {
    /// Returns `true` when the target is data addressable within the model
    /// (as opposed to a service-level document like `$metadata` or `$batch`).
    #[must_use]
    pub fn is_model_resource(self) -> bool {
        !matches!(
            self,
            RequestTargetKind::Nothing
                | RequestTargetKind::ServiceDocument
                | RequestTargetKind::Metadata
                | RequestTargetKind::Batch
        )
    }
}

impl fmt::Display for RequestTargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestTargetKind::Nothing => "nothing",
            RequestTargetKind::ServiceDocument => "service document",
            RequestTargetKind::EntitySet => "entity set",
            RequestTargetKind::Entity => "entity",
            RequestTargetKind::Singleton => "singleton",
            RequestTargetKind::ComplexProperty => "complex property",
            RequestTargetKind::Primitive => "primitive property",
            RequestTargetKind::PrimitiveValue => "primitive value",
            RequestTargetKind::OpenProperty => "open property",
            RequestTargetKind::Metadata => "metadata document",
            RequestTargetKind::Batch => "batch endpoint",
            RequestTargetKind::Reference => "entity reference",
            RequestTargetKind::MediaResource => "media resource",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::RequestTargetKind;

    #[test]
    fn model_resource_classification() {
        assert!(RequestTargetKind::EntitySet.is_model_resource());
        assert!(RequestTargetKind::PrimitiveValue.is_model_resource());
        assert!(!RequestTargetKind::Metadata.is_model_resource());
        assert!(!RequestTargetKind::Batch.is_model_resource());
        assert!(!RequestTargetKind::Nothing.is_model_resource());
    }

    #[test]
    fn display_names() {
        assert_eq!(RequestTargetKind::EntitySet.to_string(), "entity set");
        assert_eq!(RequestTargetKind::Metadata.to_string(), "metadata document");
    }
}
