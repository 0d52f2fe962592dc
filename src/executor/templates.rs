//! Starter code for the editor.

/// Template kind producing a hello-world program.
pub const HELLO: &str = "hello";

const JAVASCRIPT_HELLO: &str = r#"console.log("Hello, World!");
"#;

/// Starter snippet for `language`.
///
/// Only the `hello` kind has content; other kinds return an empty string.
/// Unknown languages get the JavaScript snippet.
#[must_use]
pub fn template_code(language: &str, kind: &str) -> &'static str {
    if kind != HELLO {
        return "";
    }

    match language.to_ascii_lowercase().as_str() {
        "typescript" => {
            r#"const greeting: string = "Hello, World!";
console.log(greeting);
"#
        }
        "python" => {
            r#"print("Hello, World!")
"#
        }
        "java" => {
            r#"public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#
        }
        "c" => {
            r#"#include <stdio.h>

int main(void) {
    printf("Hello, World!\n");
    return 0;
}
"#
        }
        "cpp" => {
            r#"#include <iostream>

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}
"#
        }
        "csharp" => {
            r#"using System;

class Program {
    static void Main() {
        Console.WriteLine("Hello, World!");
    }
}
"#
        }
        "go" => {
            r#"package main

import "fmt"

func main() {
	fmt.Println("Hello, World!")
}
"#
        }
        "rust" => {
            r#"fn main() {
    println!("Hello, World!");
}
"#
        }
        "php" => {
            r#"<?php
echo "Hello, World!\n";
"#
        }
        "ruby" => {
            r#"puts "Hello, World!"
"#
        }
        "kotlin" => {
            r#"fun main() {
    println("Hello, World!")
}
"#
        }
        "swift" => {
            r#"print("Hello, World!")
"#
        }
        "bash" => {
            r#"echo "Hello, World!"
"#
        }
        _ => JAVASCRIPT_HELLO,
    }
}
