//! Forming element references from a destructuring pattern.

use smallvec::SmallVec;
use tern_ir::{Name, Span};

use crate::arena::to_u32;
use crate::{DeclArena, DeclId, PatternId, SliceRange, VarPattern};

type IndexPath = SmallVec<[u32; 4]>;

/// One identifier of a pattern and the index path leading to it.
struct Leaf {
    name: Name,
    span: Span,
    path: IndexPath,
}

impl DeclArena {
    /// Allocate one element reference per identifier in `var`'s pattern.
    ///
    /// Each reference gets the index path from the pattern root to its leaf
    /// and lives in the same scope as `var`. References come back in source
    /// order. A var with a simple name yields none.
    ///
    /// Binding is done once per var: later calls return the references
    /// formed by the first one without allocating again.
    ///
    /// # Panics
    /// Panics if `var` is not a var declaration.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn bind_pattern_elements(&mut self, var: DeclId) -> Vec<DeclId> {
        let decl = self.var(var);
        let Some(root) = decl.pattern() else {
            return Vec::new();
        };
        if let Some(bound) = decl.bound_refs {
            return (bound.start..bound.start + bound.len).map(DeclId::new).collect();
        }

        let mut leaves = Vec::new();
        self.collect_leaves(root, &mut IndexPath::new(), &mut leaves);

        let context = self.context(var);
        let start = to_u32(self.len(), "declarations");
        let refs: Vec<DeclId> = leaves
            .into_iter()
            .map(|leaf| self.alloc_element_ref(context, var, leaf.span, leaf.name, &leaf.path))
            .collect();
        self.var_mut(var).bound_refs = Some(SliceRange {
            start,
            len: to_u32(refs.len(), "element references"),
        });
        refs
    }

    fn collect_leaves(&self, pattern: PatternId, path: &mut IndexPath, out: &mut Vec<Leaf>) {
        match *self.pattern(pattern) {
            VarPattern::Simple { name, span } => out.push(Leaf {
                name,
                span,
                path: path.clone(),
            }),
            VarPattern::Tuple { .. } => {
                for (index, &element) in (0u32..).zip(self.pattern_elements(pattern)) {
                    path.push(index);
                    self.collect_leaves(element, path, out);
                    path.pop();
                }
            }
        }
    }
}
