//! The type pool.
//!
//! Items and their flags are parallel vectors indexed by [`Idx`]; the
//! variable-length payloads of tuples, functions and aliases share one
//! `extra` vector. Structural types are deduplicated through `intern_map`,
//! inference variables never are.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use tern_ir::Name;

use crate::{Idx, Item, Tag, TypeFlags};

/// Binding state of an inference variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VarState {
    /// Still being inferred.
    Unbound,
    /// Solved; the variable stands for the linked type.
    Link(Idx),
}

/// Deduplication key for interned items.
#[derive(Clone, PartialEq, Eq, Hash)]
enum InternKey {
    Simple(Tag, u32),
    Complex(Tag, Box<[u32]>),
}

/// Flat storage for every type of a compilation session.
pub struct Pool {
    items: Vec<Item>,
    flags: Vec<TypeFlags>,
    extra: Vec<u32>,
    intern_map: FxHashMap<InternKey, Idx>,
    var_states: Vec<VarState>,
}

/// Convert a length to `u32`, panicking with context on overflow.
pub(crate) fn to_u32(n: usize, what: &str) -> u32 {
    u32::try_from(n).unwrap_or_else(|_| panic!("too many {what}: {n} exceeds u32::MAX"))
}

impl Pool {
    /// Create a pool holding only the pre-interned types.
    pub fn new() -> Self {
        let mut pool = Pool {
            items: Vec::with_capacity(256),
            flags: Vec::with_capacity(256),
            extra: Vec::new(),
            intern_map: FxHashMap::default(),
            var_states: Vec::new(),
        };

        // Order must match the `Idx` constants.
        let resolved = TypeFlags::IS_PRIMITIVE | TypeFlags::IS_RESOLVED;
        pool.push(Item::primitive(Tag::Int), resolved);
        pool.push(Item::primitive(Tag::Float), resolved);
        pool.push(Item::primitive(Tag::Bool), resolved);
        pool.push(Item::primitive(Tag::Str), resolved);
        pool.push(Item::primitive(Tag::Char), resolved);
        pool.push(Item::primitive(Tag::Unit), resolved);
        pool.push(Item::primitive(Tag::Never), resolved);
        pool.push(Item::primitive(Tag::Error), resolved | TypeFlags::HAS_ERROR);
        pool.push(Item::primitive(Tag::Dependent), TypeFlags::HAS_DEPENDENT);

        debug_assert_eq!(pool.items.len(), Idx::PRIMITIVE_COUNT as usize);
        pool
    }

    fn push(&mut self, item: Item, flags: TypeFlags) -> Idx {
        let idx = Idx::from_raw(to_u32(self.items.len(), "types"));
        self.items.push(item);
        self.flags.push(flags);
        idx
    }

    /// Intern an item whose payload fits in `data`.
    fn intern(&mut self, tag: Tag, data: u32, flags: TypeFlags) -> Idx {
        let key = InternKey::Simple(tag, data);
        if let Some(&idx) = self.intern_map.get(&key) {
            return idx;
        }
        let idx = self.push(Item::new(tag, data), flags);
        self.intern_map.insert(key, idx);
        idx
    }

    /// Intern an item whose payload lives in the extra array.
    fn intern_complex(&mut self, tag: Tag, payload: &[u32], flags: TypeFlags) -> Idx {
        debug_assert!(tag.uses_extra());
        let key = InternKey::Complex(tag, payload.into());
        if let Some(&idx) = self.intern_map.get(&key) {
            return idx;
        }
        let start = to_u32(self.extra.len(), "extra words");
        self.extra.extend_from_slice(payload);
        let idx = self.push(Item::new(tag, start), flags);
        self.intern_map.insert(key, idx);
        idx
    }

    // === Queries ===

    /// Number of types in the pool, including the pre-interned ones.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds nothing beyond the pre-interned types.
    pub fn is_empty(&self) -> bool {
        self.items.len() <= Idx::PRIMITIVE_COUNT as usize
    }

    /// Raw item of a type.
    #[inline]
    #[track_caller]
    pub fn item(&self, idx: Idx) -> Item {
        self.items[idx.index()]
    }

    /// Kind of a type.
    #[inline]
    #[track_caller]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items[idx.index()].tag
    }

    /// Cached flags of a type.
    #[inline]
    #[track_caller]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags[idx.index()]
    }

    /// Length-prefixed payload of a tuple or function.
    fn counted_payload(&self, idx: Idx) -> &[u32] {
        let start = self.item(idx).extra_idx();
        let count = self.extra[start] as usize;
        &self.extra[start + 1..=start + count]
    }

    /// Number of components of a tuple type.
    ///
    /// # Panics
    /// Panics if `idx` is not a tuple.
    #[track_caller]
    pub fn tuple_len(&self, idx: Idx) -> usize {
        assert_eq!(self.tag(idx), Tag::Tuple, "tuple_len on a non-tuple type");
        self.counted_payload(idx).len()
    }

    /// Component `index` of a tuple type, or `None` when out of range.
    ///
    /// # Panics
    /// Panics if `idx` is not a tuple.
    #[track_caller]
    pub fn tuple_elem(&self, idx: Idx, index: usize) -> Option<Idx> {
        assert_eq!(self.tag(idx), Tag::Tuple, "tuple_elem on a non-tuple type");
        self.counted_payload(idx).get(index).copied().map(Idx::from_raw)
    }

    /// All components of a tuple type.
    ///
    /// # Panics
    /// Panics if `idx` is not a tuple.
    #[track_caller]
    pub fn tuple_elems(&self, idx: Idx) -> Vec<Idx> {
        assert_eq!(self.tag(idx), Tag::Tuple, "tuple_elems on a non-tuple type");
        self.counted_payload(idx)
            .iter()
            .copied()
            .map(Idx::from_raw)
            .collect()
    }

    /// Parameter types of a function type.
    ///
    /// # Panics
    /// Panics if `idx` is not a function.
    #[track_caller]
    pub fn function_params(&self, idx: Idx) -> Vec<Idx> {
        assert_eq!(self.tag(idx), Tag::Function, "function_params on a non-function");
        self.counted_payload(idx)
            .iter()
            .copied()
            .map(Idx::from_raw)
            .collect()
    }

    /// Return type of a function type.
    ///
    /// # Panics
    /// Panics if `idx` is not a function.
    #[track_caller]
    pub fn function_return(&self, idx: Idx) -> Idx {
        assert_eq!(self.tag(idx), Tag::Function, "function_return on a non-function");
        let start = self.item(idx).extra_idx();
        let count = self.extra[start] as usize;
        Idx::from_raw(self.extra[start + 1 + count])
    }

    /// Name of a nominal type.
    ///
    /// # Panics
    /// Panics if `idx` is not a nominal type.
    #[track_caller]
    pub fn named_name(&self, idx: Idx) -> Name {
        let item = self.item(idx);
        assert_eq!(item.tag, Tag::Named, "named_name on a non-nominal type");
        Name::from_raw(item.data)
    }

    /// Spelled name of an alias type.
    ///
    /// # Panics
    /// Panics if `idx` is not an alias.
    #[track_caller]
    pub fn alias_name(&self, idx: Idx) -> Name {
        let item = self.item(idx);
        assert_eq!(item.tag, Tag::Alias, "alias_name on a non-alias type");
        Name::from_raw(self.extra[item.extra_idx()])
    }

    /// Type an alias stands for.
    ///
    /// # Panics
    /// Panics if `idx` is not an alias.
    #[track_caller]
    pub fn alias_target(&self, idx: Idx) -> Idx {
        let item = self.item(idx);
        assert_eq!(item.tag, Tag::Alias, "alias_target on a non-alias type");
        Idx::from_raw(self.extra[item.extra_idx() + 1])
    }

    // === Inference variables ===

    /// Binding state of an inference variable.
    ///
    /// # Panics
    /// Panics if `idx` is not an inference variable.
    #[track_caller]
    pub fn var_state(&self, idx: Idx) -> VarState {
        let item = self.item(idx);
        assert_eq!(item.tag, Tag::Var, "var_state on a non-variable type");
        self.var_states[item.var_id()]
    }

    /// Record the solution of an inference variable.
    ///
    /// Binding a variable to itself, directly or through links and alias
    /// sugar, leaves it unbound: `?T = ?T` carries no information, and
    /// recording it would make `resolve` cycle.
    ///
    /// # Panics
    /// Panics if `var` is not an unbound inference variable.
    #[track_caller]
    pub fn bind_var(&mut self, var: Idx, ty: Idx) {
        let item = self.item(var);
        assert_eq!(item.tag, Tag::Var, "bind_var on a non-variable type");
        assert_eq!(
            self.var_states[item.var_id()],
            VarState::Unbound,
            "inference variable bound twice"
        );
        if self.canonical(ty) == var {
            tracing::trace!(?var, ?ty, "skipping self-binding of inference variable");
            return;
        }
        self.var_states[item.var_id()] = VarState::Link(ty);
        tracing::trace!(?var, ?ty, "bound inference variable");
    }

    /// Follow solved inference variables to their current representative.
    pub fn resolve(&self, mut idx: Idx) -> Idx {
        while self.tag(idx) == Tag::Var {
            match self.var_state(idx) {
                VarState::Link(target) => idx = target,
                VarState::Unbound => break,
            }
        }
        idx
    }

    /// Resolve variables and strip alias sugar until neither applies.
    pub fn canonical(&self, mut idx: Idx) -> Idx {
        loop {
            idx = self.resolve(idx);
            if self.tag(idx) != Tag::Alias {
                return idx;
            }
            idx = self.alias_target(idx);
        }
    }

    /// Whether `idx` still stands for "not inferred yet".
    pub fn is_pending(&self, idx: Idx) -> bool {
        self.tag(self.canonical(idx)).is_unresolved()
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("types", &self.items.len())
            .field("vars", &self.var_states.len())
            .finish_non_exhaustive()
    }
}
