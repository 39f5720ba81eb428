fn main() {
    // ESP-IDF link arguments and environment; nothing to do for host builds.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
