use crate::expr::Expr;

/// Pre-order depth-first iterator. Children are pushed in reverse so they
/// come out left to right.
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    pub fn new(root: &'a Expr) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children().into_iter().rev());
        Some(current)
    }
}

impl<'a> IntoIterator for &'a Expr {
    type Item = &'a Expr;
    type IntoIter = ExprIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
