use gcode2vtk::{parse_line, trace_path};

fn main() {
    println!("=== Line Tokenizer Demo ===");

    let test_lines = [
        "G1 X4.4 Y-4.4 Z0.3 E0.33107 asdasdasd",
        "G00",
        "G0 F7200 X68.135 Y-.319",
        "TIME",
        "G0 F7200 X Y-.319",
        "X4.4 Y-4.4 Z0.3 E0.33107",
    ];

    for line in test_lines {
        println!("\nInput: '{}'", line);
        let result = parse_line(line);
        println!("Parsed: {:?}", result);
    }

    println!("\n=== Path Reconstruction Demo ===");
    let gcode = "G1 Z0.3\nG1 X10 Y0 E0.5\nG1 X10 Y10 E0.5\n";
    let toolpath = trace_path(gcode);
    println!(
        "{} points, {} segments",
        toolpath.points.len(),
        toolpath.connectivity.len()
    );
    for (i, j) in &toolpath.connectivity {
        println!("segment {} -> {}", i, j);
    }
}
