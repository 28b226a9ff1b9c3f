#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use lanes::parsing;

    fn swim_files(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

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

        assert!(!files.is_empty(), "No .swim files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_parse() {
        let files = swim_files(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(sets) => {
                    if sets.is_empty() {
                        println!("File {:?} produced no sets", file);
                        failures.push(file.clone());
                    }
                }
                Err(e) => {
                    println!("File {:?} failed to parse: {:?}", file, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let files = swim_files(Path::new("tests/broken/"));

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            match parsing::parse(&content) {
                Ok(_) => {
                    println!("File {:?} unexpectedly parsed successfully", file);
                    unexpected_successes.push(file.clone());
                }
                Err(errors) => {
                    assert!(!errors.is_empty());
                }
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should fail to parse, but {} files succeeded",
                unexpected_successes.len()
            );
        }
    }
}
