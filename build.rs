fn main() {
    cc::Build::new()
        .file("src/hello.c")
        .include("include")
        .compile("greeterbridge");
    println!("cargo:rerun-if-changed=src/hello.c");
    println!("cargo:rerun-if-changed=include/hello.h");
}
