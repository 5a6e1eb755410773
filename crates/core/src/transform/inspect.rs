use crate::Transform;

/// A wrapper that observes input and output without modifying behavior.
///
/// This struct is used internally by `.inspect()`.
pub(crate) struct Inspect<C, InputHandler, OutputHandler> {
    pub(crate) transform: C,
    pub(crate) input_handler: InputHandler,
    pub(crate) output_handler: OutputHandler,
}

impl<T, C, InputHandler, OutputHandler> Transform<T> for Inspect<C, InputHandler, OutputHandler>
where
    C: Transform<T>,
    InputHandler: Fn(&T),
    OutputHandler: Fn(&C::Output),
{
    type Output = C::Output;
    type Error = C::Error;

    fn apply(&self, value: T) -> Result<Self::Output, Self::Error> {
        (self.input_handler)(&value);
        let output = self.transform.apply(value)?;
        (self.output_handler)(&output);
        Ok(output)
    }
}
