//! Template for a function with positional optional parameters.
//!
//! Purpose
//! - Show the recommended shape: accept an argument list, bind it into named
//!   slots, then branch on which slots were supplied.
//! - Calls that differ only by trailing `NIL`s behave identically.
//!
//! Run: cargo run -p variadics --example tutorial

use variadics::prelude::*;

fn describe(variadic: Vec<Option<Arg>>) -> String {
    // unpack the argument list into optional parameters
    let [name, age, height]: [Option<Arg>; 3] = bind_array(variadic);

    let name = slot_ref::<&str>(&name).expect("name must be a &str");
    let age = slot_ref::<i32>(&age).expect("age must be an i32");
    let height = slot_ref::<f64>(&height).expect("height must be an f64");

    let mut parts = Vec::new();
    parts.push(match name {
        Some(n) => format!("name={n}"),
        None => "no name".to_string(),
    });
    if age == Some(&34) {
        parts.push("age 34 entered".to_string());
    } else if let Some(a) = age {
        parts.push(format!("age={a}"));
    }
    if height.is_none() {
        parts.push("no height".to_string());
    }
    parts.join(", ")
}

fn main() {
    // call A
    println!("A: {}", describe(args!["Gerry", 20, 5.9]));

    // call B (same result)
    println!("B: {}", describe(args!["Gerry", 20]));
    println!("B: {}", describe(args!["Gerry", 20, NIL]));

    // call C (same result)
    println!("C: {}", describe(args![NIL, 20]));
    println!("C: {}", describe(args![NIL, 20, NIL]));

    // call D (same result)
    println!("D: {}", describe(args![]));
    println!("D: {}", describe(args![NIL]));
    println!("D: {}", describe(args![NIL, NIL, NIL]));
}
