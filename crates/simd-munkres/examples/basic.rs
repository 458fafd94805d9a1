//! Basic example of solving assignment problems.

use simd_munkres::prelude::*;

fn main() {
    println!("simd-munkres - Basic Example\n");
    println!("{}\n", simd_munkres::version_info());

    // Three workers, four jobs. Entry (i, j) is the time worker i needs for job j.
    let times = vec![
        71.0f64, 78.0, 13.0, 45.0, // worker 0
        37.0, 7.0, 7.0, 3.0, // worker 1
        83.0, 97.0, 72.0, 28.0, // worker 2
    ];

    println!("Cost matrix (3x4):");
    print_matrix(&times, 3, 4);

    let costs = CostRef::from_slice(&times, 3, 4).expect("valid 3x4 matrix");
    let (assignment, stats) = Munkres::new()
        .solve_with_stats(costs)
        .expect("solvable problem");

    println!("\nMinimum-cost assignment:");
    for (worker, job) in assignment.pairs() {
        println!("  worker {} -> job {} ({:.1})", worker, job, costs.get(worker, job));
    }
    println!("  total = {:.1}", assignment.total_cost(costs));
    println!("  {:?}", stats);

    // Entries as profits
    println!("\n--- Maximizing ---\n");

    let profit = vec![
        vec![80, 7, 93],
        vec![23, 38, 56],
        vec![79, 62, 89],
    ];
    let owned = CostMatrix::from_rows(&profit).expect("rectangular rows");
    let best = Munkres::new()
        .objective(Objective::Maximize)
        .solve(owned.as_ref())
        .expect("solvable problem");
    println!("  columns = {:?}, total = {}", best.columns(), best.total_cost(owned.as_ref()));

    // Forbidden pairings
    println!("\n--- Forbidden Pairings ---\n");

    let inf = f32::INFINITY;
    let restricted = [
        inf, 4.0, 9.0, //
        2.0, inf, inf, //
        inf, 6.0, 1.0, //
    ];
    let columns = find_assignments(&restricted, 3, 3).expect("valid 3x3 matrix");
    println!("  columns = {:?}", columns);

    // Error reporting
    println!("\n--- Errors ---\n");

    match find_assignments(&[1.0; 6], 3, 2) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  3x2: {}", e),
    }
    match find_assignments::<f64>(&[], 2, 2) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  empty: {}", e),
    }

    println!("\nDone!");
}

fn print_matrix(data: &[f64], rows: usize, cols: usize) {
    for i in 0..rows {
        print!("  ");
        for j in 0..cols {
            print!("{:6.1} ", data[i * cols + j]);
        }
        println!();
    }
}
