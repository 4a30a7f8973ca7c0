/// Renders one child given the indentation prefix for its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
