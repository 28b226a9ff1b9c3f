#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use lanes::formatting::*;
    use lanes::parsing;

    /// Golden test for the format command
    ///
    /// This test:
    /// 1. Reads all .swim files from tests/golden/
    /// 2. Runs the equivalent of the `format` command on each file
    /// 3. Compares the formatted output with the original input
    /// 4. Shows clear diffs when differences are found
    ///
    /// The files are expected to be in their canonical formatted form. If
    /// one fails this test, either the parser & formatter is wrong or the
    /// golden file needs reformatting after a deliberate style change.

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden/");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("swim")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .swim files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let sets = match parsing::parse(&original) {
                Ok(sets) => sets,
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                    continue;
                }
            };

            let formatted = render(&Identity, &sets);

            if original != formatted {
                show_diff(&original, &formatted, &file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Golden files should already be in canonical form, but {} files differ",
                failures.len()
            );
        }
    }
}
