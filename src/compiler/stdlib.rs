//! Builtins support unit.
//!
//! Generated programs include `Builtins.cpp`, which defines the wrapper
//! classes for the primitive types. Each class exposes exactly the methods
//! listed for its type in the method registry, under the registry's method
//! names.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const BUILTINS_FILE_NAME: &str = "Builtins.cpp";

pub const BUILTINS_SOURCE: &str = r#"#pragma once

#include <iostream>
#include <string>

class Nothing {
};

class Bool {
public:
    std::string val;

    Bool(std::string val) : val(val) {}

    Bool AND(Bool other) {
        return Bool(val == "true" && other.val == "true" ? "true" : "false");
    }

    Bool OR(Bool other) {
        return Bool(val == "true" || other.val == "true" ? "true" : "false");
    }

    Nothing PRINT() {
        std::cout << val << std::endl;
        return Nothing();
    }
};

class Int {
public:
    long long val;

    Int(long long val) : val(val) {}

    Int PLUS(Int other) { return Int(val + other.val); }
    Int MINUS(Int other) { return Int(val - other.val); }
    Int TIMES(Int other) { return Int(val * other.val); }
    Int DIVIDE(Int other) { return Int(val / other.val); }

    Bool LT(Int other) { return Bool(val < other.val ? "true" : "false"); }
    Bool GT(Int other) { return Bool(val > other.val ? "true" : "false"); }
    Bool EQ(Int other) { return Bool(val == other.val ? "true" : "false"); }

    Nothing PRINT() {
        std::cout << val << std::endl;
        return Nothing();
    }
};

class String {
public:
    std::string val;

    String(std::string val) : val(val) {}

    String PLUS(String other) { return String(val + other.val); }

    Nothing PRINT() {
        std::cout << val << std::endl;
        return Nothing();
    }
};
"#;

/// Writes the builtins unit into `dir` and returns its path.
pub fn write_stdlib(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(BUILTINS_FILE_NAME);
    fs::write(&path, BUILTINS_SOURCE)?;

    Ok(path)
}
