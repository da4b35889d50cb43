//! Type construction helpers for the Pool.

use tern_ir::Name;

use super::{to_u32, Pool, VarState};
use crate::{Idx, Item, Tag, TypeFlags};

impl Pool {
    /// Create a tuple type `(elems...)`.
    ///
    /// Empty tuples return `Idx::UNIT`.
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        if elems.is_empty() {
            return Idx::UNIT;
        }

        // Layout: [elem_count, elem0, elem1, ...]
        let mut payload = Vec::with_capacity(elems.len() + 1);
        payload.push(to_u32(elems.len(), "tuple elements"));
        payload.extend(elems.iter().map(|e| e.raw()));

        let flags = TypeFlags::from_children(
            TypeFlags::IS_COMPOSITE,
            elems.iter().map(|&e| self.flags(e)),
        );
        self.intern_complex(Tag::Tuple, &payload, flags)
    }

    /// Create a pair type `(a, b)`.
    pub fn pair(&mut self, a: Idx, b: Idx) -> Idx {
        self.tuple(&[a, b])
    }

    /// Create a function type `(params...) -> ret`.
    pub fn function(&mut self, params: &[Idx], ret: Idx) -> Idx {
        // Layout: [param_count, param0, param1, ..., return_type]
        let mut payload = Vec::with_capacity(params.len() + 2);
        payload.push(to_u32(params.len(), "function parameters"));
        payload.extend(params.iter().map(|p| p.raw()));
        payload.push(ret.raw());

        let flags = TypeFlags::from_children(
            TypeFlags::IS_FUNCTION,
            params.iter().chain(std::iter::once(&ret)).map(|&t| self.flags(t)),
        );
        self.intern_complex(Tag::Function, &payload, flags)
    }

    /// Create a nominal type reference.
    pub fn named(&mut self, name: Name) -> Idx {
        self.intern(
            Tag::Named,
            name.raw(),
            TypeFlags::IS_NAMED | TypeFlags::IS_RESOLVED,
        )
    }

    /// Create the sugared alias `name` for `target`.
    ///
    /// Two aliases with the same spelling and target are the same type.
    pub fn alias(&mut self, name: Name, target: Idx) -> Idx {
        let flags = TypeFlags::from_children(TypeFlags::IS_NAMED, [self.flags(target)]);
        self.intern_complex(Tag::Alias, &[name.raw(), target.raw()], flags)
    }

    /// Create a fresh unbound inference variable.
    pub fn fresh_var(&mut self) -> Idx {
        let var_id = to_u32(self.var_states.len(), "inference variables");
        self.var_states.push(VarState::Unbound);
        self.push(Item::new(Tag::Var, var_id), TypeFlags::HAS_VAR)
    }
}
