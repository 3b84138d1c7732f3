//! Actions bind an option to a piece of caller state.
//!
//! Every action holds an exclusive borrow of its target for as long as the
//! [`OptionTable`](crate::OptionTable) it belongs to is alive. The parser
//! calls [`Action::invoke`] once per value: with `None` for flags and with
//! the argument text otherwise.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::Not;

use crate::convert::{ConversionError, FromArg};

pub trait Action {
    fn invoke(&mut self, value: Option<&str>) -> Result<(), ConversionError>;
}

// ============================================================================
// Counting
// ============================================================================

/// Values that can be stepped up and down by one.
pub trait Counter {
    fn increment(&mut self);
    fn decrement(&mut self);
}

macro_rules! int_counter {
    ($($t:ty),*) => {$(
        impl Counter for $t {
            fn increment(&mut self) {
                *self = self.saturating_add(1);
            }

            fn decrement(&mut self) {
                *self = self.saturating_sub(1);
            }
        }
    )*};
}

int_counter!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Counter for f32 {
    fn increment(&mut self) {
        *self += 1.0;
    }

    fn decrement(&mut self) {
        *self -= 1.0;
    }
}

impl Counter for f64 {
    fn increment(&mut self) {
        *self += 1.0;
    }

    fn decrement(&mut self) {
        *self -= 1.0;
    }
}

pub struct Increment<'a, T>(&'a mut T);

impl<T: Counter> Action for Increment<'_, T> {
    fn invoke(&mut self, _value: Option<&str>) -> Result<(), ConversionError> {
        self.0.increment();
        Ok(())
    }
}

pub struct Decrement<'a, T>(&'a mut T);

impl<T: Counter> Action for Decrement<'_, T> {
    fn invoke(&mut self, _value: Option<&str>) -> Result<(), ConversionError> {
        self.0.decrement();
        Ok(())
    }
}

// ============================================================================
// Constants
// ============================================================================

pub struct Toggle<'a, T>(&'a mut T);

impl<T: Not<Output = T> + Copy> Action for Toggle<'_, T> {
    fn invoke(&mut self, _value: Option<&str>) -> Result<(), ConversionError> {
        *self.0 = !*self.0;
        Ok(())
    }
}

pub struct StoreConst<'a, T> {
    target: &'a mut T,
    value: T,
}

impl<T: Clone> Action for StoreConst<'_, T> {
    fn invoke(&mut self, _value: Option<&str>) -> Result<(), ConversionError> {
        *self.target = self.value.clone();
        Ok(())
    }
}

// ============================================================================
// Values
// ============================================================================

/// Converts the argument with [`FromArg`] and overwrites the target.
pub struct Store<'a, T>(&'a mut T);

impl<T: FromArg> Action for Store<'_, T> {
    fn invoke(&mut self, value: Option<&str>) -> Result<(), ConversionError> {
        let value = value.ok_or(ConversionError::Missing)?;
        *self.0 = T::from_arg(value)?;
        Ok(())
    }
}

/// Collections an [`Insert`] action can add converted values to.
pub trait Container {
    type Item: FromArg;

    fn insert_item(&mut self, item: Self::Item);
}

impl<T: FromArg> Container for Vec<T> {
    type Item = T;

    fn insert_item(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: FromArg> Container for VecDeque<T> {
    type Item = T;

    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: FromArg> Container for LinkedList<T> {
    type Item = T;

    fn insert_item(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: FromArg + Ord> Container for BTreeSet<T> {
    type Item = T;

    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: FromArg + Eq + Hash, S: BuildHasher> Container for HashSet<T, S> {
    type Item = T;

    fn insert_item(&mut self, item: T) {
        self.insert(item);
    }
}

impl Container for String {
    type Item = String;

    fn insert_item(&mut self, item: String) {
        self.push_str(&item);
    }
}

pub struct Insert<'a, C>(&'a mut C);

impl<C: Container> Action for Insert<'_, C> {
    fn invoke(&mut self, value: Option<&str>) -> Result<(), ConversionError> {
        let value = value.ok_or(ConversionError::Missing)?;
        self.0.insert_item(C::Item::from_arg(value)?);
        Ok(())
    }
}

pub struct PushFront<'a, T>(&'a mut VecDeque<T>);

impl<T: FromArg> Action for PushFront<'_, T> {
    fn invoke(&mut self, value: Option<&str>) -> Result<(), ConversionError> {
        let value = value.ok_or(ConversionError::Missing)?;
        self.0.push_front(T::from_arg(value)?);
        Ok(())
    }
}

/// Wraps a closure so it can be used as an action.
pub struct Callback<F>(F);

impl<F> Action for Callback<F>
where
    F: FnMut(Option<&str>) -> Result<(), ConversionError>,
{
    fn invoke(&mut self, value: Option<&str>) -> Result<(), ConversionError> {
        (self.0)(value)
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn store<T: FromArg>(target: &mut T) -> Store<'_, T> {
    Store(target)
}

pub fn store_const<T: Clone>(target: &mut T, value: T) -> StoreConst<'_, T> {
    StoreConst { target, value }
}

pub fn store_true(target: &mut bool) -> StoreConst<'_, bool> {
    store_const(target, true)
}

pub fn store_false(target: &mut bool) -> StoreConst<'_, bool> {
    store_const(target, false)
}

pub fn toggle<T: Not<Output = T> + Copy>(target: &mut T) -> Toggle<'_, T> {
    Toggle(target)
}

pub fn increment<T: Counter>(target: &mut T) -> Increment<'_, T> {
    Increment(target)
}

/// Same as [`increment`], reads better for `-vvv` style options.
pub fn count<T: Counter>(target: &mut T) -> Increment<'_, T> {
    Increment(target)
}

pub fn decrement<T: Counter>(target: &mut T) -> Decrement<'_, T> {
    Decrement(target)
}

/// Appends to sequences, inserts into sets, concatenates onto a `String`.
pub fn insert<C: Container>(target: &mut C) -> Insert<'_, C> {
    Insert(target)
}

pub fn push_front<T: FromArg>(target: &mut VecDeque<T>) -> PushFront<'_, T> {
    PushFront(target)
}

pub fn callback<F>(f: F) -> Callback<F>
where
    F: FnMut(Option<&str>) -> Result<(), ConversionError>,
{
    Callback(f)
}
