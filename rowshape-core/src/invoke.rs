/// Callable accepting the elements of the tuple `Args` as positional arguments.
///
/// Implemented for every `FnOnce` whose parameter list is exactly `Args`: the signature
/// is deduced from the callable, a mismatch in arity or types does not build.
pub trait Invoke<Args> {
    type Output;
    fn invoke(self, args: Args) -> Self::Output;
}

/// Callable taking a `&mut Target` receiver followed by the elements of `Args`,
/// like a method path `Type::method`.
pub trait InvokeMethod<Target, Args> {
    type Output;
    fn invoke_method(self, target: &mut Target, args: Args) -> Self::Output;
}

/// Calls `callable` moving the elements of `args` into it, in ascending order.
///
/// # Examples
/// ```rust
/// use rowshape_core::invoke_unpacked;
/// let label = invoke_unpacked(|id: i32, name: String| format!("{id}:{name}"), (7, "x".to_string()));
/// assert_eq!(label, "7:x");
/// ```
pub fn invoke_unpacked<F: Invoke<Args>, Args>(callable: F, args: Args) -> F::Output {
    callable.invoke(args)
}

/// Calls `method(target, args...)`.
pub fn invoke_method<Target, F, Args>(target: &mut Target, method: F, args: Args) -> F::Output
where
    F: InvokeMethod<Target, Args>,
{
    method.invoke_method(target, args)
}
