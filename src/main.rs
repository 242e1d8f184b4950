fn main() {
    mediconsult::run();
}
