//! Compiles the generated parser and the external scanner.

use std::path::Path;

fn main() {
	let src_dir = Path::new("src");

	let mut build = cc::Build::new();
	build
		.std("c11")
		.include(src_dir)
		.warnings(false)
		.flag_if_supported("-Wno-unused-parameter")
		.flag_if_supported("-Wno-unused-but-set-variable");

	#[cfg(target_env = "msvc")]
	build.flag("-utf-8");

	for file in ["parser.c", "scanner.c"] {
		let path = src_dir.join(file);
		println!("cargo:rerun-if-changed={}", path.display());
		build.file(path);
	}
	println!("cargo:rerun-if-changed={}", src_dir.join("tree_sitter/parser.h").display());

	build.compile("tree-sitter-mathprog");
}
