//! Toroidal tic-tac-toe GUI
//!
//! A graphical interface for playing wrap-around tic-tac-toe against the
//! computer.

use tictactorus::ui::TorusApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 560.0])
            .with_min_inner_size([600.0, 440.0])
            .with_title("Tic-Tac-Torus"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Torus",
        options,
        Box::new(|cc| Ok(Box::new(TorusApp::new(cc)))),
    )
}
