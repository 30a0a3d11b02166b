//! The contiguous growable array.
//!
//! [`DynArray`] owns a `Vec<T>` materialised to its full capacity plus a
//! cursor for the live prefix. Growth is geometric (5 slots from empty,
//! then 1.5x), insertion and erasure shift the tail in place, and every
//! storage acquisition is admitted by an [`Alloc`] capability first.

use crate::error::ArrayError;
use skein_core::{Alloc, HostAlloc};
use std::fmt;
use std::mem;

/// Capacity of the first allocation when growing from empty.
pub const INITIAL_CAPACITY: usize = 5;

/// A contiguous growable array of `T` with positional insert and erase.
///
/// Storage is a `Vec<T>` kept exactly as long as the capacity, with every
/// slot materialised; `len` counts the live prefix and the remaining slots
/// hold `T::default()` bookkeeping values that are never exposed. Mutating
/// operations therefore require `T: Default` — the default value plays the
/// role zeroed bytes play in an untyped buffer.
///
/// The capability `A` is consulted before storage moves: the control block
/// is charged at construction, buffer growth goes through `reallocate`,
/// and everything is credited back on drop. With the default [`HostAlloc`]
/// these are formalities; a refusing capability makes the corresponding
/// operation fail with the array unchanged.
pub struct DynArray<T, A: Alloc = HostAlloc> {
    /// Backing storage. Always `capacity` slots long.
    buf: Vec<T>,
    /// Number of live elements at the front of `buf`.
    len: usize,
    /// Admission capability, retained for the array's lifetime.
    alloc: A,
}

impl<T: Default> DynArray<T> {
    /// Create an empty array backed by the host heap.
    ///
    /// Fails with [`ArrayError::ZeroSizedElement`] if `T` has zero size.
    pub fn new() -> Result<Self, ArrayError> {
        Self::new_in(HostAlloc)
    }
}

impl<T: Default, A: Alloc> DynArray<T, A> {
    /// Create an empty array using the given allocation capability.
    ///
    /// Charges the capability for the control block; a refusal surfaces as
    /// [`ArrayError::Alloc`] and nothing is constructed. Fails with
    /// [`ArrayError::ZeroSizedElement`] if `T` has zero size, since no
    /// positive stride can address such elements.
    pub fn new_in(alloc: A) -> Result<Self, ArrayError> {
        if mem::size_of::<T>() == 0 {
            return Err(ArrayError::ZeroSizedElement);
        }
        alloc.allocate(mem::size_of::<Self>())?;
        Ok(Self {
            buf: Vec::new(),
            len: 0,
            alloc,
        })
    }

    /// Ensure capacity for at least `capacity` elements.
    ///
    /// Existing capacity is never shrunk: requests at or below the current
    /// capacity are no-ops. The one rejected request is an *initial*
    /// reservation of zero ([`ArrayError::ZeroReserve`]); once capacity
    /// exists, `reserve(0)` is an ordinary no-op.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity == 0 && self.buf.is_empty() {
            return Err(ArrayError::ZeroReserve);
        }
        if capacity <= self.buf.len() {
            return Ok(());
        }
        self.alloc.reallocate(
            self.buf.len() * mem::size_of::<T>(),
            capacity * mem::size_of::<T>(),
        )?;
        self.buf.resize_with(capacity, T::default);
        Ok(())
    }

    /// Set the logical length to `new_len`.
    ///
    /// Growing reserves storage as needed and fills the new tail with
    /// `T::default()`. Shrinking drops the abandoned values and cannot
    /// fail. On a capability refusal both length and capacity are
    /// unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len > self.buf.len() {
            self.reserve(new_len)?;
        }
        if new_len > self.len {
            for slot in &mut self.buf[self.len..new_len] {
                *slot = T::default();
            }
        } else {
            for slot in &mut self.buf[new_len..self.len] {
                *slot = T::default();
            }
        }
        self.len = new_len;
        Ok(())
    }

    /// Drop all live elements, keeping capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = T::default();
        }
        self.len = 0;
    }

    /// Insert `value` at position `pos`, shifting `[pos, len)` up by one.
    ///
    /// `pos == len` appends. Fails with [`ArrayError::OutOfRange`] when
    /// `pos > len`. A full array grows first (5 slots from empty, then
    /// 1.5x); a capability refusal during growth leaves the array
    /// unchanged. Returns a reference to the freshly written slot.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut T, ArrayError> {
        if pos > self.len {
            return Err(ArrayError::OutOfRange { pos, len: self.len });
        }
        if self.len == self.buf.len() {
            self.grow()?;
        }
        if pos < self.len {
            // Rotate the spare slot at `len` down to `pos`; the live
            // range [pos, len) shifts up by one without cloning.
            self.buf[pos..=self.len].rotate_right(1);
        }
        self.buf[pos] = value;
        self.len += 1;
        Ok(&mut self.buf[pos])
    }

    /// Remove and return the element at `pos`, shifting `(pos, len)` down.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `pos >= len`, which
    /// covers the empty array. Never reallocates.
    pub fn erase(&mut self, pos: usize) -> Result<T, ArrayError> {
        if pos >= self.len {
            return Err(ArrayError::OutOfRange { pos, len: self.len });
        }
        self.buf[pos..self.len].rotate_left(1);
        self.len -= 1;
        Ok(mem::replace(&mut self.buf[self.len], T::default()))
    }

    /// Append `value`, growing if full. Equivalent to `insert(len, value)`.
    pub fn push_back(&mut self, value: T) -> Result<&mut T, ArrayError> {
        self.insert(self.len, value)
    }

    /// Remove and return the last element.
    ///
    /// Fails with [`ArrayError::OutOfRange`] on an empty array.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        match self.len.checked_sub(1) {
            Some(last) => self.erase(last),
            None => Err(ArrayError::OutOfRange { pos: 0, len: 0 }),
        }
    }

    /// Insert `value` at the front. Equivalent to `insert(0, value)`.
    pub fn push_front(&mut self, value: T) -> Result<&mut T, ArrayError> {
        self.insert(0, value)
    }

    /// Remove and return the first element. Equivalent to `erase(0)`.
    pub fn pop_front(&mut self) -> Result<T, ArrayError> {
        self.erase(0)
    }

    /// Grow to the next capacity on the geometric curve.
    fn grow(&mut self) -> Result<(), ArrayError> {
        let cap = self.buf.len();
        let target = if cap == 0 {
            INITIAL_CAPACITY
        } else {
            // 1.5x, clamped upward so capacity 1 still makes progress.
            (cap + (cap >> 1)).max(cap + 1)
        };
        self.alloc.reallocate(cap * mem::size_of::<T>(), target * mem::size_of::<T>())?;
        self.buf.resize_with(target, T::default);
        Ok(())
    }
}

impl<T, A: Alloc> DynArray<T, A> {
    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots the buffer holds.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Byte length of one element, a compile-time property of `T`.
    pub fn element_stride(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buf.len() * mem::size_of::<T>()
    }

    /// Borrow the element at `pos`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `pos >= len`.
    pub fn get(&self, pos: usize) -> Result<&T, ArrayError> {
        if pos >= self.len {
            return Err(ArrayError::OutOfRange { pos, len: self.len });
        }
        Ok(&self.buf[pos])
    }

    /// Mutably borrow the element at `pos`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `pos >= len`.
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, ArrayError> {
        if pos >= self.len {
            return Err(ArrayError::OutOfRange { pos, len: self.len });
        }
        Ok(&mut self.buf[pos])
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Consume the array and take its live elements as a `Vec<T>`.
    ///
    /// The typed form of detaching the buffer from the control block: the
    /// caller walks away with the elements while the capability is
    /// credited for both the storage and the control block.
    pub fn into_vec(mut self) -> Vec<T> {
        let stored_bytes = self.buf.len() * mem::size_of::<T>();
        let mut buf = mem::take(&mut self.buf);
        buf.truncate(self.len);
        self.len = 0;
        if stored_bytes > 0 {
            self.alloc.free(stored_bytes);
        }
        buf
    }
}

impl<T, A: Alloc> Drop for DynArray<T, A> {
    fn drop(&mut self) {
        let stored_bytes = self.buf.len() * mem::size_of::<T>();
        if stored_bytes > 0 {
            self.alloc.free(stored_bytes);
        }
        self.alloc.free(mem::size_of::<Self>());
    }
}

impl<T: fmt::Debug, A: Alloc> fmt::Debug for DynArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the live prefix; the spare slots are bookkeeping.
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, A: Alloc> PartialEq for DynArray<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: Alloc> Eq for DynArray<T, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use skein_core::AllocError;
    use skein_test_utils::{FailingAlloc, MeteredAlloc};

    #[test]
    fn new_array_is_empty_with_no_buffer() {
        let arr: DynArray<u32> = DynArray::new().unwrap();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.memory_bytes(), 0);
        assert_eq!(arr.element_stride(), 4);
    }

    #[test]
    fn zero_sized_elements_rejected_at_construction() {
        let result: Result<DynArray<()>, _> = DynArray::new();
        assert_eq!(result.unwrap_err(), ArrayError::ZeroSizedElement);
    }

    #[test]
    fn first_growth_allocates_five_slots() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_back(1).unwrap();
        assert_eq!(arr.capacity(), INITIAL_CAPACITY);
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn growth_trace_is_five_then_one_point_five() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        let mut trace = Vec::new();
        for i in 0..100 {
            arr.push_back(i).unwrap();
            if trace.last() != Some(&arr.capacity()) {
                trace.push(arr.capacity());
            }
        }
        assert_eq!(arr.len(), 100);
        assert_eq!(trace, vec![5, 7, 10, 15, 22, 33, 49, 73, 109]);
        for (k, v) in arr.iter().enumerate() {
            assert_eq!(*v, k as u32);
        }
    }

    #[test]
    fn insert_at_end_appends() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.insert(0, 42).unwrap();
        assert_eq!(arr.len(), 1);
        arr.insert(1, 43).unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.as_slice(), &[42, 43]);
    }

    #[test]
    fn insert_interior_shifts_tail_up() {
        let mut arr: DynArray<String> = DynArray::new().unwrap();
        for s in ["a", "b", "d"] {
            arr.push_back(s.to_string()).unwrap();
        }
        let slot = arr.insert(2, "c".to_string()).unwrap();
        assert_eq!(*slot, "c");
        assert_eq!(arr.as_slice(), &["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_past_len_is_out_of_range() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_back(42).unwrap();
        let err = arr.insert(3, 42).unwrap_err();
        assert_eq!(err, ArrayError::OutOfRange { pos: 3, len: 1 });
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn erase_returns_the_removed_element() {
        let mut arr: DynArray<String> = DynArray::new().unwrap();
        for s in ["a", "b", "c"] {
            arr.push_back(s.to_string()).unwrap();
        }
        let removed = arr.erase(1).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(arr.as_slice(), &["a", "c"]);
    }

    #[test]
    fn erase_at_len_is_out_of_range() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_back(1).unwrap();
        arr.push_back(2).unwrap();
        // The last valid index is len - 1.
        assert!(arr.erase(1).is_ok());
        let err = arr.erase(1).unwrap_err();
        assert_eq!(err, ArrayError::OutOfRange { pos: 1, len: 1 });
    }

    #[test]
    fn empty_array_rejects_pop_and_erase() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        assert!(matches!(
            arr.pop_back(),
            Err(ArrayError::OutOfRange { pos: 0, len: 0 })
        ));
        assert!(matches!(
            arr.erase(0),
            Err(ArrayError::OutOfRange { pos: 0, len: 0 })
        ));
        assert!(matches!(arr.pop_front(), Err(ArrayError::OutOfRange { .. })));
    }

    #[test]
    fn push_front_and_pop_front_work_at_position_zero() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_front(2).unwrap();
        arr.push_front(1).unwrap();
        arr.push_back(3).unwrap();
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
        assert_eq!(arr.pop_front().unwrap(), 1);
        assert_eq!(arr.as_slice(), &[2, 3]);
    }

    #[test]
    fn pop_back_keeps_capacity() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_back(7).unwrap();
        let cap = arr.capacity();
        assert_eq!(arr.pop_back().unwrap(), 7);
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), cap);
    }

    #[test]
    fn initial_zero_reserve_is_rejected() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        assert_eq!(arr.reserve(0).unwrap_err(), ArrayError::ZeroReserve);
    }

    #[test]
    fn zero_reserve_after_growth_is_a_noop() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.reserve(8).unwrap();
        assert_eq!(arr.capacity(), 8);
        arr.reserve(0).unwrap();
        arr.reserve(3).unwrap();
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn reserve_grows_to_exactly_the_request() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.reserve(50).unwrap();
        assert_eq!(arr.capacity(), 50);
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.memory_bytes(), 200);
    }

    #[test]
    fn resize_zeroes_the_new_tail() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        for v in [1, 2, 3, 4, 5] {
            arr.push_back(v).unwrap();
        }
        arr.resize(3).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(*arr.get(0).unwrap(), 1);
        arr.resize(10).unwrap();
        assert_eq!(arr.len(), 10);
        // The regrown range covers the previously abandoned values too.
        for i in 3..10 {
            assert_eq!(*arr.get(i).unwrap(), 0);
        }
    }

    #[test]
    fn resize_zero_on_fresh_array_succeeds() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.resize(0).unwrap();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn clear_drops_elements_and_keeps_capacity() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        for v in 0..10 {
            arr.push_back(v).unwrap();
        }
        let cap = arr.capacity();
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), cap);
        assert!(matches!(arr.get(0), Err(ArrayError::OutOfRange { .. })));
    }

    #[test]
    fn get_checks_the_live_range_only() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_back(9).unwrap();
        assert_eq!(*arr.get(0).unwrap(), 9);
        // Capacity is 5 here, but only index 0 is live.
        assert_eq!(
            arr.get(1).unwrap_err(),
            ArrayError::OutOfRange { pos: 1, len: 1 }
        );
    }

    #[test]
    fn get_mut_writes_through() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        arr.push_back(1).unwrap();
        *arr.get_mut(0).unwrap() = 11;
        assert_eq!(*arr.get(0).unwrap(), 11);
    }

    #[test]
    fn earlier_elements_survive_a_later_erase() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        for v in [10, 20, 30, 40] {
            arr.push_back(v).unwrap();
        }
        arr.erase(2).unwrap();
        assert_eq!(*arr.get(0).unwrap(), 10);
        assert_eq!(*arr.get(1).unwrap(), 20);
        assert_eq!(arr.as_slice(), &[10, 20, 40]);
    }

    #[test]
    fn into_vec_hands_back_the_live_prefix() {
        let mut arr: DynArray<u32> = DynArray::new().unwrap();
        for v in [1, 2, 3] {
            arr.push_back(v).unwrap();
        }
        assert!(arr.capacity() > 3);
        let v = arr.into_vec();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn debug_and_eq_cover_the_live_prefix_only() {
        let mut a: DynArray<u32> = DynArray::new().unwrap();
        let mut b: DynArray<u32> = DynArray::new().unwrap();
        for v in [1, 2, 3] {
            a.push_back(v).unwrap();
        }
        b.reserve(40).unwrap();
        for v in [1, 2, 3] {
            b.push_back(v).unwrap();
        }
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "[1, 2, 3]");
    }

    #[test]
    fn refusing_capability_blocks_construction() {
        let result: Result<DynArray<u32, _>, _> = DynArray::new_in(FailingAlloc::new(0));
        assert!(matches!(result, Err(ArrayError::Alloc(_))));
    }

    #[test]
    fn growth_refusal_leaves_the_array_unchanged() {
        // Admit the control block, refuse everything after.
        let mut arr: DynArray<u32, _> = DynArray::new_in(FailingAlloc::new(1)).unwrap();
        let err = arr.push_back(1).unwrap_err();
        assert!(matches!(err, ArrayError::Alloc(_)));
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn reserve_refusal_reports_the_requested_bytes() {
        let mut arr: DynArray<u32, _> = DynArray::new_in(FailingAlloc::new(1)).unwrap();
        let err = arr.reserve(10).unwrap_err();
        assert_eq!(err, ArrayError::Alloc(AllocError { requested: 40 }));
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn capability_accounting_balances_on_drop() {
        let meter = MeteredAlloc::new();
        {
            let mut arr: DynArray<u64, _> = DynArray::new_in(meter.clone()).unwrap();
            for i in 0..20 {
                arr.push_back(i).unwrap();
            }
            assert!(meter.held_bytes() > 0);
            assert_eq!(meter.allocate_calls(), 1);
            assert!(meter.reallocate_calls() >= 1);
        }
        assert_eq!(meter.held_bytes(), 0);
    }

    #[test]
    fn capability_accounting_balances_through_into_vec() {
        let meter = MeteredAlloc::new();
        let mut arr: DynArray<u32, _> = DynArray::new_in(meter.clone()).unwrap();
        for v in [1, 2, 3] {
            arr.push_back(v).unwrap();
        }
        let v = arr.into_vec();
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(meter.held_bytes(), 0);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            PushBack(u32),
            PushFront(u32),
            PopBack,
            PopFront,
            Insert(usize, u32),
            Erase(usize),
            Reserve(usize),
            Resize(usize),
            Clear,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<u32>().prop_map(Op::PushBack),
                any::<u32>().prop_map(Op::PushFront),
                Just(Op::PopBack),
                Just(Op::PopFront),
                (0usize..48, any::<u32>()).prop_map(|(pos, v)| Op::Insert(pos, v)),
                (0usize..48).prop_map(Op::Erase),
                (0usize..64).prop_map(Op::Reserve),
                (0usize..48).prop_map(Op::Resize),
                Just(Op::Clear),
            ]
        }

        /// Drive the array and a `Vec<u32>` model with the same op,
        /// mirroring the array's validity rules onto the model.
        fn apply(arr: &mut DynArray<u32>, model: &mut Vec<u32>, op: &Op) {
            match *op {
                Op::PushBack(v) => {
                    arr.push_back(v).unwrap();
                    model.push(v);
                }
                Op::PushFront(v) => {
                    arr.push_front(v).unwrap();
                    model.insert(0, v);
                }
                Op::PopBack => match model.pop() {
                    Some(expected) => assert_eq!(arr.pop_back().unwrap(), expected),
                    None => assert!(arr.pop_back().is_err()),
                },
                Op::PopFront => {
                    if model.is_empty() {
                        assert!(arr.pop_front().is_err());
                    } else {
                        assert_eq!(arr.pop_front().unwrap(), model.remove(0));
                    }
                }
                Op::Insert(pos, v) => {
                    if pos <= model.len() {
                        arr.insert(pos, v).unwrap();
                        model.insert(pos, v);
                    } else {
                        assert!(arr.insert(pos, v).is_err());
                    }
                }
                Op::Erase(pos) => {
                    if pos < model.len() {
                        assert_eq!(arr.erase(pos).unwrap(), model.remove(pos));
                    } else {
                        assert!(arr.erase(pos).is_err());
                    }
                }
                Op::Reserve(n) => {
                    // Only the initial zero reserve fails.
                    let _ = arr.reserve(n);
                }
                Op::Resize(n) => {
                    arr.resize(n).unwrap();
                    model.resize(n, 0);
                }
                Op::Clear => {
                    arr.clear();
                    model.clear();
                }
            }
        }

        proptest! {
            #[test]
            fn agrees_with_a_vec_model(
                ops in proptest::collection::vec(op_strategy(), 1..100),
            ) {
                let mut arr: DynArray<u32> = DynArray::new().unwrap();
                let mut model: Vec<u32> = Vec::new();
                for op in &ops {
                    apply(&mut arr, &mut model, op);
                    prop_assert_eq!(arr.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn len_never_exceeds_capacity(
                ops in proptest::collection::vec(op_strategy(), 1..100),
            ) {
                let mut arr: DynArray<u32> = DynArray::new().unwrap();
                let mut model: Vec<u32> = Vec::new();
                for op in &ops {
                    apply(&mut arr, &mut model, op);
                    prop_assert!(arr.len() <= arr.capacity());
                    if arr.capacity() == 0 {
                        prop_assert!(arr.is_empty());
                    }
                }
            }

            #[test]
            fn capacity_changes_follow_the_growth_curve(
                count in 1usize..300,
            ) {
                let mut arr: DynArray<u32> = DynArray::new().unwrap();
                let mut last_cap = arr.capacity();
                for i in 0..count {
                    arr.push_back(i as u32).unwrap();
                    let cap = arr.capacity();
                    if cap != last_cap {
                        let expected = if last_cap == 0 {
                            INITIAL_CAPACITY
                        } else {
                            last_cap + last_cap / 2
                        };
                        prop_assert_eq!(cap, expected);
                        prop_assert!(cap > last_cap);
                        last_cap = cap;
                    }
                }
            }

            #[test]
            fn inserted_value_is_immediately_retrievable(
                seed in proptest::collection::vec(any::<u32>(), 0..24),
                pos_pick in any::<usize>(),
                value in any::<u32>(),
            ) {
                let mut arr: DynArray<u32> = DynArray::new().unwrap();
                for v in &seed {
                    arr.push_back(*v).unwrap();
                }
                let pos = pos_pick % (arr.len() + 1);
                arr.insert(pos, value).unwrap();
                prop_assert_eq!(*arr.get(pos).unwrap(), value);
            }

            #[test]
            fn earlier_indices_unchanged_by_later_erase(
                seed in proptest::collection::vec(any::<u32>(), 2..24),
                picks in any::<(usize, usize)>(),
            ) {
                let mut arr: DynArray<u32> = DynArray::new().unwrap();
                for v in &seed {
                    arr.push_back(*v).unwrap();
                }
                let j = 1 + picks.0 % (arr.len() - 1);
                let i = picks.1 % j;
                let before = *arr.get(i).unwrap();
                arr.erase(j).unwrap();
                prop_assert_eq!(*arr.get(i).unwrap(), before);
            }

            #[test]
            fn push_pop_round_trip_restores_len(
                seed in proptest::collection::vec(any::<u32>(), 0..24),
                value in any::<u32>(),
            ) {
                let mut arr: DynArray<u32> = DynArray::new().unwrap();
                for v in &seed {
                    arr.push_back(*v).unwrap();
                }
                let len_before = arr.len();
                let cap_before = arr.capacity();
                arr.push_back(value).unwrap();
                prop_assert_eq!(arr.pop_back().unwrap(), value);
                prop_assert_eq!(arr.len(), len_before);
                prop_assert!(arr.capacity() >= cap_before);
            }
        }
    }
}
