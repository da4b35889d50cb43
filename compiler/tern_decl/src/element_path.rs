//! Resolving an element reference's index path against a type.

use tern_types::{Idx, Pool, Tag};

use crate::{DeclArena, DeclId};

/// Outcome of walking an index path into a type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PathType {
    /// The path selects this component type.
    Resolved(Idx),
    /// The path reaches structure that is still being inferred.
    Pending,
    /// The path does not fit the type.
    Invalid,
}

impl PathType {
    /// Whether the path selected a type.
    #[inline]
    pub fn is_resolved(self) -> bool {
        matches!(self, PathType::Resolved(_))
    }

    /// Whether the path ran into an inference hole.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, PathType::Pending)
    }

    /// Whether the path does not fit the type.
    #[inline]
    pub fn is_invalid(self) -> bool {
        matches!(self, PathType::Invalid)
    }

    /// The selected type, if resolution succeeded.
    #[inline]
    pub fn resolved(self) -> Option<Idx> {
        match self {
            PathType::Resolved(ty) => Some(ty),
            PathType::Pending | PathType::Invalid => None,
        }
    }
}

/// Walk `path` into `ty`, one tuple component per index.
///
/// Inference links and alias sugar are looked through at every step. The
/// returned type is the component as stored, so sugar on the final
/// component is preserved.
#[tracing::instrument(level = "trace", skip(pool))]
pub fn type_for_path(pool: &Pool, ty: Idx, path: &[u32]) -> PathType {
    let mut current = ty;
    for &index in path {
        let canonical = pool.canonical(current);
        match pool.tag(canonical) {
            Tag::Tuple => match pool.tuple_elem(canonical, index as usize) {
                Some(elem) => current = elem,
                None => return PathType::Invalid,
            },
            tag if tag.is_unresolved() => return PathType::Pending,
            _ => return PathType::Invalid,
        }
    }
    if pool.is_pending(current) {
        PathType::Pending
    } else {
        PathType::Resolved(current)
    }
}

impl DeclArena {
    /// Type selected by an element reference.
    ///
    /// A var whose type is not set yet resolves to [`PathType::Pending`].
    ///
    /// # Panics
    /// Panics if `id` is not an element reference.
    #[track_caller]
    pub fn element_ref_type(&self, id: DeclId, pool: &Pool) -> PathType {
        let var = self.element_ref(id).var();
        match self.var(var).value().type_if_set() {
            Some(ty) => type_for_path(pool, ty, self.element_path(id)),
            None => PathType::Pending,
        }
    }
}
