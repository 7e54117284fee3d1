//! Built-in scaffold files.
//!
//! Literal data only. Every file is copied byte-for-byte into each
//! `exercise-{n}` folder; nothing here is substituted at runtime.

use super::{FileTemplate, SectionTemplate};
use crate::domain::value_objects::{LanguageKey, SectionKey};

// ── Shared file bodies ───────────────────────────────────────────────────────

const JS_SCRIPT: &str = "// Add your JavaScript code here\n";

const JS_NODE_PACKAGE: &str = r#"{
  "name": "exercise",
  "version": "1.0.0",
  "private": true,
  "main": "server.js",
  "scripts": {
    "start": "node server.js"
  },
  "dependencies": {
    "express": "^4.19.2"
  }
}
"#;

const JS_EXPRESS_SERVER: &str = r#"const express = require('express');

const app = express();
app.use(express.json());

// Add your routes here

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => {
  console.log(`Server listening on http://localhost:${PORT}`);
});
"#;

const PY_SCRIPT: &str = "# Add your Python code here\n";

const TS_CONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "commonjs",
    "strict": true,
    "esModuleInterop": true,
    "outDir": "dist"
  },
  "include": ["src"]
}
"#;

const TS_NODE_PACKAGE: &str = r#"{
  "name": "exercise",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "build": "tsc",
    "start": "ts-node src/index.ts"
  },
  "devDependencies": {
    "ts-node": "^10.9.2",
    "typescript": "^5.4.0",
    "@types/node": "^20.12.0"
  }
}
"#;

const RUST_BIN_MANIFEST: &str = r#"[package]
name = "exercise"
version = "0.1.0"
edition = "2021"

[dependencies]
"#;

const RUST_LIB_MANIFEST: &str = r#"[package]
name = "exercise"
version = "0.1.0"
edition = "2021"

[lib]
path = "src/lib.rs"

[dependencies]
"#;

const RUST_MAIN: &str = r#"// Add your Rust code here

fn main() {
    println!("Hello, exercise!");
}
"#;

const RUST_LIB: &str = r#"// Add your Rust code here

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        // Add your tests here
    }
}
"#;

const GO_MOD: &str = "module exercise\n\ngo 1.22\n";

const GO_MAIN: &str = r#"package main

// Add your Go code here

func main() {
}
"#;

// ── Table ────────────────────────────────────────────────────────────────────

pub(super) static SECTION_TEMPLATES: &[SectionTemplate] = &[
    // ── JavaScript ───────────────────────────────────────────────────────────
    SectionTemplate {
        language: LanguageKey::JavaScript,
        section: SectionKey::Frontend,
        files: &[
            FileTemplate {
                path: "index.html",
                content: r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Exercise</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <div id="app"></div>
  <script src="script.js"></script>
</body>
</html>
"##,
            },
            FileTemplate {
                path: "style.css",
                content: "/* Add your styles here */\n",
            },
            FileTemplate {
                path: "script.js",
                content: JS_SCRIPT,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::JavaScript,
        section: SectionKey::Backend,
        files: &[
            FileTemplate {
                path: "package.json",
                content: JS_NODE_PACKAGE,
            },
            FileTemplate {
                path: "server.js",
                content: JS_EXPRESS_SERVER,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::JavaScript,
        section: SectionKey::Fullstack,
        files: &[
            FileTemplate {
                path: "frontend/index.html",
                content: r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Exercise</title>
</head>
<body>
  <div id="app"></div>
  <script src="script.js"></script>
</body>
</html>
"##,
            },
            FileTemplate {
                path: "frontend/script.js",
                content: r#"// Add your frontend code here
// The backend listens on http://localhost:3000
"#,
            },
            FileTemplate {
                path: "backend/package.json",
                content: JS_NODE_PACKAGE,
            },
            FileTemplate {
                path: "backend/server.js",
                content: JS_EXPRESS_SERVER,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::JavaScript,
        section: SectionKey::DataStructures,
        files: &[FileTemplate {
            path: "script.js",
            content: JS_SCRIPT,
        }],
    },
    SectionTemplate {
        language: LanguageKey::JavaScript,
        section: SectionKey::Algorithms,
        files: &[FileTemplate {
            path: "script.js",
            content: JS_SCRIPT,
        }],
    },
    // ── Python ───────────────────────────────────────────────────────────────
    // Data Science and Machine Learning have no scaffold files.
    SectionTemplate {
        language: LanguageKey::Python,
        section: SectionKey::Backend,
        files: &[
            FileTemplate {
                path: "requirements.txt",
                content: "fastapi>=0.110\nuvicorn>=0.29\n",
            },
            FileTemplate {
                path: "app.py",
                content: r#"from fastapi import FastAPI

app = FastAPI()

# Add your routes here
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Python,
        section: SectionKey::Algorithms,
        files: &[
            FileTemplate {
                path: "solution.py",
                content: PY_SCRIPT,
            },
            FileTemplate {
                path: "test_solution.py",
                content: r#"import unittest

import solution  # noqa: F401


class TestSolution(unittest.TestCase):
    def test_placeholder(self):
        # Add your tests here
        pass


if __name__ == "__main__":
    unittest.main()
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Python,
        section: SectionKey::WebDevelopment,
        files: &[
            FileTemplate {
                path: "requirements.txt",
                content: "flask>=3.0\n",
            },
            FileTemplate {
                path: "app.py",
                content: r#"from flask import Flask, render_template

app = Flask(__name__)


@app.route("/")
def index():
    return render_template("index.html")


if __name__ == "__main__":
    app.run(debug=True)
"#,
            },
            FileTemplate {
                path: "templates/index.html",
                content: r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Exercise</title>
</head>
<body>
  <!-- Add your markup here -->
</body>
</html>
"##,
            },
        ],
    },
    // ── TypeScript ───────────────────────────────────────────────────────────
    SectionTemplate {
        language: LanguageKey::TypeScript,
        section: SectionKey::Frontend,
        files: &[
            FileTemplate {
                path: "index.html",
                content: r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Exercise</title>
</head>
<body>
  <div id="app"></div>
  <script src="dist/main.js"></script>
</body>
</html>
"##,
            },
            FileTemplate {
                path: "tsconfig.json",
                content: TS_CONFIG,
            },
            FileTemplate {
                path: "src/main.ts",
                content: "// Add your TypeScript code here\n",
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::TypeScript,
        section: SectionKey::Backend,
        files: &[
            FileTemplate {
                path: "package.json",
                content: TS_NODE_PACKAGE,
            },
            FileTemplate {
                path: "tsconfig.json",
                content: TS_CONFIG,
            },
            FileTemplate {
                path: "src/index.ts",
                content: r#"import { createServer } from "http";

// Add your request handling here
const server = createServer((_req, res) => {
  res.end("ok");
});

server.listen(3000);
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::TypeScript,
        section: SectionKey::Fullstack,
        files: &[
            FileTemplate {
                path: "frontend/src/main.ts",
                content: "// Add your frontend code here\n",
            },
            FileTemplate {
                path: "backend/src/index.ts",
                content: "// Add your backend code here\n",
            },
            FileTemplate {
                path: "tsconfig.json",
                content: TS_CONFIG,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::TypeScript,
        section: SectionKey::React,
        files: &[
            FileTemplate {
                path: "package.json",
                content: r#"{
  "name": "exercise",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build"
  },
  "dependencies": {
    "react": "^18.3.0",
    "react-dom": "^18.3.0"
  },
  "devDependencies": {
    "@types/react": "^18.3.0",
    "@types/react-dom": "^18.3.0",
    "typescript": "^5.4.0",
    "vite": "^5.2.0"
  }
}
"#,
            },
            FileTemplate {
                path: "src/App.tsx",
                content: r#"export default function App() {
  // Add your component code here
  return <div />;
}
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::TypeScript,
        section: SectionKey::NodeJs,
        files: &[
            FileTemplate {
                path: "package.json",
                content: TS_NODE_PACKAGE,
            },
            FileTemplate {
                path: "tsconfig.json",
                content: TS_CONFIG,
            },
            FileTemplate {
                path: "src/index.ts",
                content: "// Add your TypeScript code here\n",
            },
        ],
    },
    // ── Rust ─────────────────────────────────────────────────────────────────
    SectionTemplate {
        language: LanguageKey::Rust,
        section: SectionKey::Cli,
        files: &[
            FileTemplate {
                path: "Cargo.toml",
                content: RUST_BIN_MANIFEST,
            },
            FileTemplate {
                path: "src/main.rs",
                content: r#"// Add your Rust code here

use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    println!("{args:?}");
}
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Rust,
        section: SectionKey::WebServer,
        files: &[
            FileTemplate {
                path: "Cargo.toml",
                content: RUST_BIN_MANIFEST,
            },
            FileTemplate {
                path: "src/main.rs",
                content: r#"// Add your Rust code here

use std::net::TcpListener;

fn main() -> std::io::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:8080")?;
    for stream in listener.incoming() {
        let _stream = stream?;
        // Handle the connection here
    }
    Ok(())
}
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Rust,
        section: SectionKey::SystemsProgramming,
        files: &[
            FileTemplate {
                path: "Cargo.toml",
                content: RUST_BIN_MANIFEST,
            },
            FileTemplate {
                path: "src/main.rs",
                content: RUST_MAIN,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Rust,
        section: SectionKey::DataStructures,
        files: &[
            FileTemplate {
                path: "Cargo.toml",
                content: RUST_LIB_MANIFEST,
            },
            FileTemplate {
                path: "src/lib.rs",
                content: RUST_LIB,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Rust,
        section: SectionKey::Algorithms,
        files: &[
            FileTemplate {
                path: "Cargo.toml",
                content: RUST_LIB_MANIFEST,
            },
            FileTemplate {
                path: "src/lib.rs",
                content: RUST_LIB,
            },
        ],
    },
    // ── Go ───────────────────────────────────────────────────────────────────
    SectionTemplate {
        language: LanguageKey::Go,
        section: SectionKey::Backend,
        files: &[
            FileTemplate {
                path: "go.mod",
                content: GO_MOD,
            },
            FileTemplate {
                path: "main.go",
                content: r#"package main

import (
	"log"
	"net/http"
)

// Add your handlers here

func main() {
	log.Fatal(http.ListenAndServe(":8080", nil))
}
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Go,
        section: SectionKey::Cli,
        files: &[
            FileTemplate {
                path: "go.mod",
                content: GO_MOD,
            },
            FileTemplate {
                path: "main.go",
                content: r#"package main

import (
	"fmt"
	"os"
)

// Add your Go code here

func main() {
	fmt.Println(os.Args[1:])
}
"#,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Go,
        section: SectionKey::WebServices,
        files: &[
            FileTemplate {
                path: "go.mod",
                content: GO_MOD,
            },
            FileTemplate {
                path: "main.go",
                content: GO_MAIN,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Go,
        section: SectionKey::DataStructures,
        files: &[
            FileTemplate {
                path: "go.mod",
                content: GO_MOD,
            },
            FileTemplate {
                path: "main.go",
                content: GO_MAIN,
            },
        ],
    },
    SectionTemplate {
        language: LanguageKey::Go,
        section: SectionKey::Algorithms,
        files: &[
            FileTemplate {
                path: "go.mod",
                content: GO_MOD,
            },
            FileTemplate {
                path: "main.go",
                content: GO_MAIN,
            },
            FileTemplate {
                path: "main_test.go",
                content: r#"package main

import "testing"

func TestPlaceholder(t *testing.T) {
	// Add your tests here
}
"#,
            },
        ],
    },
];
