/// A ternary expression handler.  Rust's `if` is already an
/// expression, but `cargo fmt` splits it across lines, and the matrix
/// of border-handling rules in the gradient and cumulative passes is
/// much easier to read as a table of one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
