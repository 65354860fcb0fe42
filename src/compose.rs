//! Function composition over a single value type.
//!
//! Composition is lazy: building a composed function never calls any of
//! its parts. Evaluation order follows mathematical notation, so
//! `compose(f, g)` runs `g` first and
//! `compose_list([f0, f1, ..., fn])` runs `fn` first and `f0` last.

use crate::error::ListError;

/// A boxed unary function from `T` to `T`.
pub type UnaryFn<T> = Box<dyn Fn(T) -> T>;

/// Returns `h` with `h(x) = f(g(x))`.
///
/// `f` and `g` are moved into the returned closure.
///
/// # Examples
/// ```
/// use u_lists::compose::compose;
/// let inc_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(inc_then_double(3), 8);
/// ```
pub fn compose<T, F, G>(f: F, g: G) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
    G: Fn(T) -> T,
{
    move |x| f(g(x))
}

/// Composes `fns` into `x ↦ fns[0](fns[1](...fns[n-1](x)))`.
///
/// A single function is returned as is, boxed.
///
/// # Panics
/// Panics if `fns` is empty. Use [`try_compose_list`] to get an error
/// instead.
///
/// # Examples
/// ```
/// use u_lists::compose::{compose_list, UnaryFn};
/// let fns: Vec<UnaryFn<i32>> = vec![Box::new(|x: i32| x + 1), Box::new(|x: i32| x * 2)];
/// let h = compose_list(fns);
/// assert_eq!(h(3), 7); // (3 * 2) + 1
/// ```
pub fn compose_list<T: 'static>(fns: Vec<UnaryFn<T>>) -> UnaryFn<T> {
    try_compose_list(fns).unwrap_or_else(|err| panic!("compose_list: {err}"))
}

/// Fallible form of [`compose_list`].
///
/// # Errors
/// Returns [`ListError::EmptyFunctionList`] if `fns` is empty.
///
/// # Examples
/// ```
/// use u_lists::{compose::{try_compose_list, UnaryFn}, ListError};
/// let none: Vec<UnaryFn<i32>> = Vec::new();
/// assert_eq!(try_compose_list(none).err(), Some(ListError::EmptyFunctionList));
/// ```
pub fn try_compose_list<T: 'static>(fns: Vec<UnaryFn<T>>) -> Result<UnaryFn<T>, ListError> {
    let mut fns = fns.into_iter().rev();
    let Some(innermost) = fns.next() else {
        tracing::debug!("rejected empty function list");
        return Err(ListError::EmptyFunctionList);
    };
    Ok(fns.fold(innermost, |inner, outer| {
        Box::new(compose(outer, inner)) as UnaryFn<T>
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn boxed<F: Fn(i32) -> i32 + 'static>(f: F) -> UnaryFn<i32> {
        Box::new(f)
    }

    // --- compose ---

    #[test]
    fn test_compose_applies_g_first() {
        let h = compose(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!(h(3), 7);
        let h = compose(|x: i32| x * 2, |x: i32| x + 1);
        assert_eq!(h(3), 8);
    }

    #[test]
    fn test_compose_strings() {
        let h = compose(|s: String| s.to_uppercase(), |s: String| format!("{s}!"));
        assert_eq!(h("hi".to_string()), "HI!");
    }

    #[test]
    fn test_compose_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let h = compose(
            move |x: i32| {
                counter.set(counter.get() + 1);
                x
            },
            |x: i32| x,
        );
        assert_eq!(calls.get(), 0);
        h(1);
        h(2);
        assert_eq!(calls.get(), 2);
    }

    // --- compose_list ---

    #[test]
    fn test_compose_list_first_is_outermost() {
        let h = compose_list(vec![boxed(|x| x + 1), boxed(|x| x * 2)]);
        assert_eq!(h(3), 7);
    }

    #[test]
    fn test_compose_list_single() {
        let h = compose_list(vec![boxed(|x| x - 10)]);
        assert_eq!(h(3), -7);
    }

    #[test]
    fn test_compose_list_many() {
        // 10 - ((x + 3) * 2)
        let h = compose_list(vec![boxed(|x| 10 - x), boxed(|x| x * 2), boxed(|x| x + 3)]);
        assert_eq!(h(1), 2);
        assert_eq!(h(0), 4);
    }

    #[test]
    fn test_compose_list_order_against_nested_calls() {
        let parts: [fn(i32) -> i32; 4] = [|x| x * 3, |x| x - 1, |x| x * x, |x| x + 5];
        let h = compose_list(parts.iter().map(|&f| boxed(f)).collect());
        for x in -5..5 {
            assert_eq!(h(x), parts[0](parts[1](parts[2](parts[3](x)))));
        }
    }

    #[test]
    #[should_panic(expected = "cannot compose an empty list of functions")]
    fn test_compose_list_empty_panics() {
        let _ = compose_list::<i32>(Vec::new());
    }

    // --- try_compose_list ---

    #[test]
    fn test_try_compose_list_ok() {
        let h = try_compose_list(vec![boxed(|x| x + 1), boxed(|x| x * 2)]).unwrap();
        assert_eq!(h(5), 11);
    }

    #[test]
    fn test_try_compose_list_empty() {
        assert_eq!(
            try_compose_list::<i32>(Vec::new()).err(),
            Some(ListError::EmptyFunctionList)
        );
    }

    #[test]
    fn test_compose_list_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let fns: Vec<UnaryFn<i32>> = vec![
            boxed(move |x| {
                counter.set(counter.get() + 1);
                x + 1
            }),
            boxed(|x| x),
        ];
        let h = compose_list(fns);
        assert_eq!(calls.get(), 0);
        assert_eq!(h(1), 2);
        assert_eq!(calls.get(), 1);
    }
}
