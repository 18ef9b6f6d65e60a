mod config;
mod database;
mod error;
mod models;
mod services;

use config::AppConfig;
use error::AppError;
use models::CapturedPhoto;
use photo_roll::{
    FetchStatus, HttpMirrorStore, MarsApi, MarsPhotoRepository, MirrorStore,
    NetworkMarsPhotosRepository, NetworkPicsumPhotosRepository, PhotoRoll, PicsumApi,
    PicsumPhotoRepository,
};
use rusqlite::Connection;
use std::io::{BufRead, Write};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let conn = database::init_database(Path::new(&config.database_path))?;

    let mars = NetworkMarsPhotosRepository::new(MarsApi::new(config.mars_base_url.clone())?);
    let picsum =
        NetworkPicsumPhotosRepository::new(PicsumApi::new(config.picsum_base_url.clone())?);
    let store = HttpMirrorStore::new(config.mirror_base_url.clone())?;
    // The camera command mirrors outside the controller
    let camera_mirror = store.clone();

    println!("marsroll - type 'help' for commands");
    let mut controller = PhotoRoll::start(mars, picsum, store).await;
    print_status(&controller, &conn);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "" => continue,
            "roll" => {
                if let Err(e) = controller.roll().await {
                    println!("Roll count not updated: {}", e);
                }
            }
            "mars" => controller.refresh_mars().await,
            "picsum" => controller.refresh_picsum().await,
            "blur" => controller.apply_blur(),
            "gray" => controller.apply_grayscale(),
            "save" => {
                if controller.mars_status().is_success() && controller.picsum_status().is_success()
                {
                    match controller.save().await {
                        Ok(()) => println!("Saved"),
                        Err(e) => println!("Save failed: {}", e),
                    }
                } else {
                    println!("Nothing to save yet, both photos must be displayed");
                }
            }
            "load" => {
                if let Err(e) = controller.load().await {
                    println!("Load failed: {}", e);
                }
            }
            "camera" => {
                if argument.is_empty() {
                    println!("Usage: camera <uri>");
                    continue;
                }
                let photo = CapturedPhoto::new(argument.to_string());
                services::camera_service::save_captured_photo(&conn, &photo)?;
                if let Err(e) = camera_mirror.save_camera_pic(&photo.uri).await {
                    println!("Camera photo saved locally, mirror failed: {}", e);
                }
            }
            "status" => {}
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        }

        print_status(&controller, &conn);
    }

    Ok(())
}

fn print_status<M, P, S>(controller: &PhotoRoll<M, P, S>, conn: &Connection)
where
    M: MarsPhotoRepository,
    P: PicsumPhotoRepository,
    S: MirrorStore,
{
    println!(
        "mars:   {}",
        describe(controller.mars_status(), |p| p.img_src.as_str())
    );
    println!(
        "picsum: {}",
        describe(controller.picsum_status(), |p| p.download_url.as_str())
    );
    println!("roll done {} times", controller.roll_count());

    match services::camera_service::load_captured_photo(conn) {
        Ok(Some(photo)) => println!("camera: {}", photo.uri),
        Ok(None) => {}
        Err(e) => log::warn!("Could not read captured photo: {}", e),
    }
}

fn describe<T>(status: &FetchStatus<T>, url: impl Fn(&T) -> &str) -> String {
    match status {
        FetchStatus::Loading => "loading".to_string(),
        FetchStatus::Error => "error".to_string(),
        FetchStatus::Success { message, photo } => format!("{} | {}", message, url(photo)),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  roll          fetch new photos from both providers and count the roll");
    println!("  mars          refresh the Mars photo");
    println!("  picsum        refresh the picsum photo");
    println!("  blur          blur the picsum photo");
    println!("  gray          grayscale the picsum photo");
    println!("  save          mirror the displayed pair");
    println!("  load          bring back the mirrored pair");
    println!("  camera <uri>  record a captured camera photo");
    println!("  status        show the current state");
    println!("  quit          exit");
}
