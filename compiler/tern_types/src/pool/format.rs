//! Human-readable rendering of pool types.

use tern_ir::StringInterner;

use super::{Pool, VarState};
use crate::{Idx, Tag};

impl Pool {
    /// Render `idx` as source-like text.
    ///
    /// Solved variables print as their solution, unsolved ones as `?N`.
    pub fn display(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_type(&mut out, idx, interner);
        out
    }

    fn write_type(&self, out: &mut String, idx: Idx, interner: &StringInterner) {
        let item = self.item(idx);
        match item.tag {
            Tag::Int
            | Tag::Float
            | Tag::Bool
            | Tag::Str
            | Tag::Char
            | Tag::Unit
            | Tag::Never
            | Tag::Error
            | Tag::Dependent => out.push_str(idx.name().unwrap_or(item.tag.name())),
            Tag::Tuple => {
                out.push('(');
                self.write_list(out, &self.tuple_elems(idx), interner);
                out.push(')');
            }
            Tag::Function => {
                out.push('(');
                self.write_list(out, &self.function_params(idx), interner);
                out.push_str(") -> ");
                self.write_type(out, self.function_return(idx), interner);
            }
            Tag::Named => out.push_str(interner.lookup(self.named_name(idx))),
            Tag::Alias => out.push_str(interner.lookup(self.alias_name(idx))),
            Tag::Var => match self.var_state(idx) {
                VarState::Link(target) => self.write_type(out, target, interner),
                VarState::Unbound => {
                    out.push('?');
                    out.push_str(&item.var_id().to_string());
                }
            },
        }
    }

    fn write_list(&self, out: &mut String, elems: &[Idx], interner: &StringInterner) {
        for (i, &elem) in elems.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, elem, interner);
        }
    }
}
