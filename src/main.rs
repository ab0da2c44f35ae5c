use med_prep::MedPrepApp;
use med_prep::data::read_content_embedded;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // El contenido va embebido: si no valida, es un error de autoría
    let content = match read_content_embedded() {
        Ok(content) => content,
        Err(e) => {
            log::error!("invalid embedded content: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "MedPrep",
        options,
        Box::new(move |_cc| Ok(Box::new(MedPrepApp::new(content)))),
    )
}
