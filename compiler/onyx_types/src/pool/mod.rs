//! The type pool: storage for every type of a compilation unit.
//!
//! # Layout
//!
//! ```text
//! items:     [Item; N]          tag + data per type, indexed by Idx
//! functions: [FunctionType]     Tag::Function data indexes here
//! structs:   [StructType]       Tag::Struct data indexes here
//! ```
//!
//! Indices below `Idx::FIRST_DYNAMIC` are the basic types. Everything above
//! is allocated on demand and never freed before the pool is dropped.

mod format;
mod layout;
mod query;

use onyx_ir::Name;
use rustc_hash::FxHashMap;

use crate::{Idx, Item, Tag, BASIC_TYPES};

pub use layout::{StructLayout, POINTER_SIZE};

/// A function signature.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionType {
    /// `Idx::NONE` for a function without a return type.
    pub ret: Idx,
    /// Parameters in declaration order.
    pub params: Box<[Idx]>,
}

/// One member of a struct: where it lives and what it holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructMember {
    pub offset: u64,
    pub ty: Idx,
}

impl StructMember {
    /// Returned by member lookup when there is no such member.
    pub const ABSENT: Self = Self {
        offset: 0,
        ty: Idx::NONE,
    };

    #[inline]
    pub const fn is_absent(self) -> bool {
        self.ty.is_none()
    }
}

/// A struct type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructType {
    pub name: Name,
    /// Aggregate size in bytes. Zero until the builder finishes the struct.
    pub size: u32,
    members: FxHashMap<Name, StructMember>,
    order: Vec<Name>,
    declared: usize,
}

impl StructType {
    fn new(name: Name, capacity: usize) -> Self {
        Self {
            name,
            size: 0,
            members: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: Vec::with_capacity(capacity),
            declared: 0,
        }
    }

    /// Number of member declarations, redeclared names included.
    ///
    /// This is the count compatibility compares, so `S { x, y, x }` and
    /// `S { x, y }` do not match even though they share a name.
    #[inline]
    pub fn member_count(&self) -> usize {
        self.declared
    }

    /// Number of distinct member names.
    #[inline]
    pub fn distinct_member_count(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn member(&self, name: Name) -> Option<StructMember> {
        self.members.get(&name).copied()
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (Name, StructMember)> + '_ {
        self.order.iter().map(|name| (*name, self.members[name]))
    }

    /// Insert a member. Redeclaring a name replaces the earlier entry but keeps
    /// its position in declaration order.
    fn insert(&mut self, name: Name, member: StructMember) {
        self.declared += 1;
        if self.members.insert(name, member).is_none() {
            self.order.push(name);
        }
    }
}

/// Read-only view of one type, by kind.
#[derive(Copy, Clone, Debug)]
pub enum TypeKind<'a> {
    Basic(&'static crate::BasicType),
    Pointer { elem: Idx },
    Function(&'a FunctionType),
    Struct(&'a StructType),
}

/// The type arena of one compilation unit.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    functions: Vec<FunctionType>,
    structs: Vec<StructType>,
}

impl Pool {
    /// Create a pool holding only the basic types.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a pool with room for `capacity` derived types.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(BASIC_TYPES.len() + capacity);
        for basic in &BASIC_TYPES {
            items.push(Item::new(Tag::Basic, u32::from(basic.kind as u8)));
        }
        Self {
            items,
            functions: Vec::new(),
            structs: Vec::new(),
        }
    }

    /// Number of types in the pool, basics included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A pool always holds the basic types, so it is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, item: Item) -> Idx {
        let raw = u32::try_from(self.items.len())
            .ok()
            .filter(|raw| *raw != Idx::NONE.raw())
            .unwrap_or_else(|| panic!("type pool exceeded u32::MAX types"));
        self.items.push(item);
        Idx::from_raw(raw)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_table_idx(len: usize) -> u32 {
        len as u32
    }

    // === Construction ===

    /// Create a new pointer type `^elem`.
    ///
    /// Every call allocates a fresh instance, even for an element that
    /// already has a pointer type.
    pub fn make_pointer(&mut self, elem: Idx) -> Idx {
        self.push(Item::pointer(elem))
    }

    /// Create a function type. `ret` may be `Idx::NONE`.
    pub fn make_function(&mut self, params: Vec<Idx>, ret: Idx) -> Idx {
        let data = Self::next_table_idx(self.functions.len());
        self.functions.push(FunctionType {
            ret,
            params: params.into_boxed_slice(),
        });
        self.push(Item::new(Tag::Function, data))
    }

    /// Allocate an empty struct type named `name`.
    ///
    /// The instance exists (and can be referred to) before it has members,
    /// which is what lets a member point back at its own struct.
    pub fn alloc_struct(&mut self, name: Name, member_capacity: usize) -> Idx {
        let data = Self::next_table_idx(self.structs.len());
        self.structs.push(StructType::new(name, member_capacity));
        self.push(Item::new(Tag::Struct, data))
    }

    /// Add a member to a struct under construction.
    pub fn insert_struct_member(&mut self, st: Idx, name: Name, member: StructMember) {
        self.struct_mut(st).insert(name, member);
    }

    /// Record the final aggregate size of a struct.
    pub fn finish_struct(&mut self, st: Idx, size: u32) {
        self.struct_mut(st).size = size;
    }

    // === Access ===

    fn item(&self, idx: Idx) -> Item {
        match self.items.get(idx.raw() as usize) {
            Some(item) => *item,
            None => invalid_index(idx),
        }
    }

    /// Tag of a type.
    ///
    /// # Panics
    /// Panics on `Idx::NONE` or an index from another pool.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).tag
    }

    /// Kind and payload of a type.
    ///
    /// # Panics
    /// Panics on `Idx::NONE` or an index from another pool.
    pub fn kind(&self, idx: Idx) -> TypeKind<'_> {
        let item = self.item(idx);
        match item.tag {
            Tag::Basic => TypeKind::Basic(&BASIC_TYPES[item.table_idx()]),
            Tag::Pointer => TypeKind::Pointer { elem: item.child() },
            Tag::Function => TypeKind::Function(&self.functions[item.table_idx()]),
            Tag::Struct => TypeKind::Struct(&self.structs[item.table_idx()]),
        }
    }

    /// Like [`kind`](Self::kind), but `None` for `Idx::NONE`.
    pub fn get(&self, idx: Idx) -> Option<TypeKind<'_>> {
        idx.some().map(|idx| self.kind(idx))
    }

    /// Element of a pointer type, or `None` if `idx` is not a pointer.
    pub fn pointer_elem(&self, idx: Idx) -> Option<Idx> {
        match self.get(idx)? {
            TypeKind::Pointer { elem } => Some(elem),
            _ => None,
        }
    }

    pub fn function_type(&self, idx: Idx) -> Option<&FunctionType> {
        match self.get(idx)? {
            TypeKind::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn struct_type(&self, idx: Idx) -> Option<&StructType> {
        match self.get(idx)? {
            TypeKind::Struct(st) => Some(st),
            _ => None,
        }
    }

    fn struct_mut(&mut self, st: Idx) -> &mut StructType {
        let item = self.item(st);
        if item.tag != Tag::Struct {
            panic!("internal compiler error: {st:?} is a {} type, not a struct", item.tag);
        }
        &mut self.structs[item.table_idx()]
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
fn invalid_index(idx: Idx) -> ! {
    tracing::error!(?idx, "type index does not belong to this pool");
    panic!("internal compiler error: invalid type index {idx:?}")
}
