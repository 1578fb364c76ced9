//! Immutable list walkthrough.
//!
//! Constructs sample lists and prints the result of each operation for
//! manual inspection.
//!
//! Run with: cargo run --bin list_demo

use fp_list::{list, List};

fn main() {
    println!("=== Immutable List: Folds and Derived Operations ===\n");

    let numbers: List<i64> = list![1, 2, 3, 4, 5];
    println!("numbers = {:?}", numbers);

    // =========================================================================
    // Primitive deconstruction
    // =========================================================================
    println!("\nPrimitive deconstruction");
    println!("{}", "=".repeat(60));
    println!("tail(numbers)               = {:?}", numbers.tail());
    println!("set_head(numbers, 6)        = {:?}", numbers.set_head(6));
    println!("skip(numbers, 2)            = {:?}", numbers.skip(2));
    println!(
        "skip_while(numbers, <4)     = {:?}",
        numbers.skip_while(|x| *x < 4)
    );
    println!("init(numbers)               = {:?}", numbers.init());

    // Every edge case degrades to the empty list instead of erroring:
    let empty: List<i64> = list![];
    println!("tail([])                    = {:?}", empty.tail());
    println!("skip(numbers, 99)           = {:?}", numbers.skip(99));

    // =========================================================================
    // Folds
    // =========================================================================
    println!("\nFolds");
    println!("{}", "=".repeat(60));
    println!(
        "fold_right with cons shape  = {}",
        numbers.fold_right("nil".to_string(), |x, acc| format!("({x} . {acc})"))
    );
    println!(
        "fold_left associativity     = {}",
        numbers.fold_left("0".to_string(), |acc, x| format!("({acc} + {x})"))
    );

    // =========================================================================
    // Derived operations
    // =========================================================================
    println!("\nDerived operations");
    println!("{}", "=".repeat(60));
    println!("length(numbers)             = {}", numbers.length());
    println!("length_iter(numbers)        = {}", numbers.length_iter());
    println!("reverse(numbers)            = {:?}", numbers.reverse());
    println!("sum(numbers)                = {}", numbers.sum());
    println!("sum_with_fold(numbers)      = {}", numbers.sum_with_fold());

    let factors: List<f64> = list![1.0, 2.0, 3.0, 4.0];
    println!("product({:?})  = {}", factors, factors.product());
    let with_zero: List<f64> = list![1.0, 0.0, 3.0];
    println!(
        "product({:?})       = {} (short-circuits at 0.0)",
        with_zero,
        with_zero.product()
    );

    println!(
        "append(numbers, [7, 8, 9])  = {:?}",
        numbers.append(&list![7, 8, 9])
    );
    let nested = list![list![1, 2, 3, 4, 5], list![7, 8, 9], list![10, 11, 12]];
    println!("concat(lists)               = {:?}", nested.concat());
    println!(
        "map(numbers, square)        = {:?}",
        numbers.map(|x| x * x)
    );

    // =========================================================================
    // Formatting
    // =========================================================================
    println!("\nFormatting");
    println!("{}", "=".repeat(60));
    println!("mk_string(numbers)          = {:?}", numbers.mk_string());
    println!(
        "mk_string_with(numbers, \", \") = {:?}",
        numbers.mk_string_with(", ")
    );
}
