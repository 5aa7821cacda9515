//! Basic usage example for the modalg library.
//!
//! This example builds the three- and four-dimensional systems, multiplies
//! elements in both orders, and raises an element to a few powers.

use modalg::{Dim4, M3System, SystemBuilder};

fn main() {
    println!("modalg - Basic Usage Example\n");

    let m3 = M3System::m3(1, 2, 3, 1, 2, 7).expect("valid M3 system");
    println!("System: {m3}");

    let a = m3.element([1, 2, 3]).expect("three components");
    let b = m3.element([4, 5, 6]).expect("three components");
    println!("  a       = {a}");
    println!("  b       = {b}");
    println!("  a + b   = {}", a.add(&b).expect("same system"));
    println!("  a - b   = {}", a.sub(&b).expect("same system"));
    println!("  -a      = {}", -&a);
    println!("  a * b   = {}", a.mul(&b).expect("same system"));
    println!("  b * a   = {}", b.mul(&a).expect("same system"));
    for k in [0u32, 1, 2, 5, 10] {
        println!("  a^{k:<5} = {}", a.power(k).expect("non-negative"));
    }
    println!("  debug   = {a:?}");
    println!();

    let m4 = SystemBuilder::<Dim4>::new()
        .constants(1..=9)
        .modulus(11)
        .build()
        .expect("valid M4 system");
    println!("System: {m4}");

    let x = m4.element([1, 2, 3, 4]).expect("four components");
    let y = m4.element([5, 6, 7, 8]).expect("four components");
    println!("  x * y   = {}", x.mul(&y).expect("same system"));
    println!("  y * x   = {}", y.mul(&x).expect("same system"));
    println!("  x^5     = {}", x.power(5).expect("non-negative"));
    println!();

    // Identical constants, different system instance.
    let other = M3System::m3(1, 2, 3, 1, 2, 7).expect("valid M3 system");
    let c = other.element([1, 2, 3]).expect("three components");
    match a.mul(&c) {
        Ok(r) => println!("unexpected product {r}"),
        Err(e) => println!("Refused: {e}"),
    }
}
