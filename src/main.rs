fn main() -> eframe::Result {
    quiltkeeper::run_gui()
}
