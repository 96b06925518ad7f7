//! Type resolution: one type to inline text plus the named types it references.

use typeport_core::{Field, Marshaler, TypeGraph, TypeId, TypeKind};

use super::Config;
use super::config::Overrides;
use super::fields::FieldProjection;
use super::primitives::{exact_primitive, primitive_token};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Inline text for a type and the named types it references, in order.
///
/// `discovered` may contain duplicates; deduplication is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    pub discovered: Vec<TypeId>,
}

impl Resolved {
    fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            discovered: Vec::new(),
        }
    }
}

pub(crate) struct Resolver<'g> {
    graph: &'g TypeGraph,
    overrides: Overrides,
    tag_key: String,
    /// Root type and the label its declaration carries
    root: Option<(TypeId, String)>,
    diagnostics: Diagnostics,
}

impl<'g> Resolver<'g> {
    pub(crate) fn new(graph: &'g TypeGraph, config: &Config) -> Self {
        Self {
            graph,
            overrides: config.effective_overrides(graph),
            tag_key: config.tag_key.clone(),
            root: None,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Reference `root` as `label` instead of its declared name.
    pub(crate) fn label_root(&mut self, root: TypeId, label: impl Into<String>) {
        self.root = Some((root, label.into()));
    }

    /// Resolve `ty` to inline text.
    ///
    /// With `is_root` set, a named type is expanded structurally instead of
    /// being referenced by name.
    pub(crate) fn resolve(&mut self, ty: TypeId, is_root: bool) -> Resolved {
        let graph = self.graph;
        let def = graph.def(ty);

        if let Some(token) = exact_primitive(def) {
            return Resolved::leaf(token);
        }

        if !is_root && let Some(name) = def.name() {
            tracing::trace!(ty = %name, "discovered");
            let text = match &self.root {
                Some((root, label)) if *root == ty => label.clone(),
                _ => name.name().to_string(),
            };
            return Resolved {
                text,
                discovered: vec![ty],
            };
        }

        if let Some(text) = self.overrides.get(ty) {
            return Resolved::leaf(text);
        }

        if let Some(marshaler) = def.marshaler() {
            self.report_marshaler(ty, marshaler);
        }

        match def.kind() {
            TypeKind::Primitive(p) => Resolved::leaf(primitive_token(*p)),
            TypeKind::Struct(fields) => self.resolve_struct(fields),
            TypeKind::Slice(elem) | TypeKind::Array { elem, .. } => {
                let elem = self.resolve(*elem, false);
                Resolved {
                    text: format!("({})[]", elem.text),
                    discovered: elem.discovered,
                }
            }
            TypeKind::Map { key, value } => {
                let key = self.resolve(*key, false);
                let value = self.resolve(*value, false);
                let mut discovered = key.discovered;
                discovered.extend(value.discovered);
                Resolved {
                    text: format!("Record<{}, {}>", key.text, value.text),
                    discovered,
                }
            }
            TypeKind::Pointer(elem) => {
                let elem = self.resolve(*elem, false);
                Resolved {
                    text: format!("{} | null", elem.text),
                    discovered: elem.discovered,
                }
            }
            TypeKind::Opaque => Resolved::leaf("unknown"),
        }
    }

    pub(crate) fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn resolve_struct(&mut self, fields: &[Field]) -> Resolved {
        let mut lines = Vec::with_capacity(fields.len());
        let mut discovered = Vec::new();

        for field in fields {
            let projection = FieldProjection::of(field, &self.tag_key);
            let resolved = self.resolve(field.ty(), false);
            lines.push(projection.render(&resolved.text));
            discovered.extend(resolved.discovered);
        }

        if lines.is_empty() {
            return Resolved {
                text: "{}".to_string(),
                discovered,
            };
        }

        Resolved {
            text: format!("{{\n{}\n}}", indent(&lines.join("\n"))),
            discovered,
        }
    }

    fn report_marshaler(&mut self, ty: TypeId, marshaler: Marshaler) {
        let subject = self.graph.display(ty);
        let kind = match marshaler {
            Marshaler::Json => DiagnosticKind::JsonMarshaler,
            Marshaler::Text => DiagnosticKind::TextMarshaler,
        };
        tracing::warn!(
            ty = %subject,
            marshaler = marshaler.interface_name(),
            "type controls its own serialization"
        );
        self.diagnostics
            .report(kind, subject.clone())
            .message(subject)
            .emit();
    }
}

/// Indent every line by one level.
fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
