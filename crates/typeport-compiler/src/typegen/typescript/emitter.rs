//! Core emitter struct and main emit logic.

use std::collections::HashSet;

use typeport_core::{TypeGraph, TypeId};

use super::Config;
use super::resolver::Resolver;
use crate::{Error, PassResult};

/// TypeScript declaration emitter over a type graph.
pub struct Emitter<'g> {
    graph: &'g TypeGraph,
    config: Config,
    resolver: Resolver<'g>,

    /// Types already emitted as declarations
    finished: HashSet<TypeId>,
    /// Types pending emission, in discovery order; may repeat
    pending: Vec<TypeId>,
    /// Output buffer
    output: String,
}

impl<'g> Emitter<'g> {
    pub fn new(graph: &'g TypeGraph, config: Config) -> Self {
        Self {
            graph,
            resolver: Resolver::new(graph, &config),
            config,
            finished: HashSet::new(),
            pending: Vec::new(),
            output: String::new(),
        }
    }

    /// Emit one declaration per named type reachable from `root`, root first.
    pub fn emit(mut self, root: TypeId) -> PassResult<String> {
        let root_label = self.root_label(root)?;
        self.resolver.label_root(root, root_label.clone());
        self.pending.push(root);

        let mut scanned = 0;
        let mut pass = 0;
        loop {
            pass += 1;
            let end = self.pending.len();
            let mut progressed = false;

            for i in scanned..end {
                let ty = self.pending[i];
                if !self.finished.insert(ty) {
                    continue;
                }
                progressed = true;

                let label = if ty == root {
                    root_label.clone()
                } else {
                    self.label(ty)
                };
                self.emit_declaration(&label, ty);
            }
            scanned = end;

            tracing::debug!(pass, declared = self.finished.len(), "worklist pass");
            if !progressed {
                break;
            }
        }

        Ok((self.output, self.resolver.into_diagnostics()))
    }

    fn emit_declaration(&mut self, label: &str, ty: TypeId) {
        let resolved = self.resolver.resolve(ty, true);
        tracing::debug!(label, discovered = resolved.discovered.len(), "declaration");

        self.emit_type_decl(label, &resolved.text);
        self.pending.extend(resolved.discovered);
    }

    /// Emit `export type Name = Body;`.
    fn emit_type_decl(&mut self, name: &str, body: &str) {
        if self.config.export {
            self.output.push_str("export ");
        }
        self.output.push_str(&format!("type {} = {};\n", name, body));
    }

    fn root_label(&self, root: TypeId) -> Result<String, Error> {
        if let Some(name) = &self.config.root_name {
            return Ok(name.clone());
        }
        match self.graph.def(root).name() {
            Some(name) => Ok(name.name().to_string()),
            None => Err(Error::AnonymousRoot(self.graph.display(root))),
        }
    }

    /// Declaration label of a discovered type. Only named types are discovered.
    fn label(&self, ty: TypeId) -> String {
        self.graph
            .def(ty)
            .name()
            .map(|name| name.name().to_string())
            .unwrap_or_else(|| self.graph.display(ty))
    }
}
