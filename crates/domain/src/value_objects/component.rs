//! Spell components: what a caster must supply to cast a spell.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ComponentError;

/// The kind of a spell component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Verbal,
    Somatic,
    Material,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbal => write!(f, "verbal"),
            Self::Somatic => write!(f, "somatic"),
            Self::Material => write!(f, "material"),
        }
    }
}

/// Material component detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialComponent {
    /// Description of the material
    pub description: String,
    /// Whether the material is consumed by the spell
    #[serde(default)]
    pub consumed: bool,
    /// Cost in gold pieces (if any)
    pub cost: Option<u32>,
}

impl MaterialComponent {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            consumed: false,
            cost: None,
        }
    }

    fn matches(&self, other: &MaterialComponent) -> bool {
        self.description.eq_ignore_ascii_case(&other.description)
    }
}

/// A single spell component, either required by a spell or supplied by a caster.
///
/// Generally only `Material` components carry a detail. That is not enforced.
///
/// # Examples
///
/// ```
/// use artificer_domain::value_objects::{Component, ComponentKind};
///
/// let verbal = Component::verbal();
/// assert_eq!(verbal.details(), (ComponentKind::Verbal, None));
///
/// let rhubarb = Component::material("powdered rhubarb leaf");
/// let (kind, detail) = rhubarb.details();
/// assert_eq!(kind, ComponentKind::Material);
/// assert_eq!(detail.map(|m| m.description.as_str()), Some("powdered rhubarb leaf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    kind: ComponentKind,
    detail: Option<MaterialComponent>,
}

impl Component {
    pub fn new(kind: ComponentKind, detail: Option<MaterialComponent>) -> Self {
        Self { kind, detail }
    }

    pub fn verbal() -> Self {
        Self::new(ComponentKind::Verbal, None)
    }

    pub fn somatic() -> Self {
        Self::new(ComponentKind::Somatic, None)
    }

    pub fn material(description: impl Into<String>) -> Self {
        Self::new(
            ComponentKind::Material,
            Some(MaterialComponent::new(description)),
        )
    }

    /// A material component that any focus or pouch satisfies.
    pub fn any_material() -> Self {
        Self::new(ComponentKind::Material, None)
    }

    #[inline]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    #[inline]
    pub fn detail(&self) -> Option<&MaterialComponent> {
        self.detail.as_ref()
    }

    /// Return the component's kind and detail, if any.
    pub fn details(&self) -> (ComponentKind, Option<&MaterialComponent>) {
        (self.kind, self.detail.as_ref())
    }

    /// Whether a supplied component satisfies this requirement.
    fn is_satisfied_by(&self, provided: &Component) -> bool {
        if self.kind != provided.kind {
            return false;
        }
        match (&self.detail, &provided.detail) {
            (Some(required), Some(given)) => required.matches(given),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// Check that `provided` covers every component in `required`.
///
/// Extra supplied components are ignored.
pub fn check_components(
    required: &[Component],
    provided: &[Component],
) -> Result<(), ComponentError> {
    for requirement in required {
        if provided.iter().any(|p| requirement.is_satisfied_by(p)) {
            continue;
        }

        if let Some(material) = requirement.detail() {
            let given = provided
                .iter()
                .find(|p| p.kind == ComponentKind::Material)
                .and_then(|p| p.detail())
                .map(|m| m.description.clone());
            return Err(ComponentError::WrongMaterial {
                required: material.description.clone(),
                provided: given,
            });
        }

        return Err(ComponentError::Missing {
            kind: requirement.kind,
        });
    }
    Ok(())
}
