fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // ESP-IDF environment is only needed for the firmware binary.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
