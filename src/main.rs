use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

use privkit::carrier::Carrier;

#[derive(Parser)]
#[command(
    name = "privkit",
    version,
    about = "Client-side privacy codecs: file encryption and image steganography.",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a self-describing container blob
    Encrypt {
        /// Path to the file to encrypt
        #[arg(long)]
        input: String,

        /// Output path for the encrypted container
        #[arg(long)]
        out: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Decrypt a container blob back to the original file
    Decrypt {
        /// Path to the encrypted container
        #[arg(long)]
        input: String,

        /// Output path (default: the filename recovered from the container)
        #[arg(long)]
        out: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Hide a text message inside an image (output is always PNG)
    Hide {
        /// Path to the carrier image
        #[arg(long)]
        image: String,

        /// Output path for the stego image
        #[arg(long)]
        out: String,

        /// Message to hide (mutually exclusive with --message-file)
        #[arg(long)]
        message: Option<String>,

        /// File whose text content to hide (mutually exclusive with --message)
        #[arg(long)]
        message_file: Option<String>,
    },

    /// Reveal a message hidden in an image
    Reveal {
        /// Path to the stego image
        #[arg(long)]
        image: String,
    },

    /// Report how many characters an image can hold
    Capacity {
        /// Path to the carrier image
        #[arg(long)]
        image: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt {
            input,
            out,
            password,
        } => {
            let password = get_password(password)?;
            cmd_encrypt(&input, &out, &password)
        }

        Commands::Decrypt {
            input,
            out,
            password,
        } => {
            let password = get_password(password)?;
            cmd_decrypt(&input, out.as_deref(), &password)
        }

        Commands::Hide {
            image,
            out,
            message,
            message_file,
        } => cmd_hide(&image, &out, message.as_deref(), message_file.as_deref()),

        Commands::Reveal { image } => cmd_reveal(&image),

        Commands::Capacity { image } => cmd_capacity(&image),
    }
}

fn get_password(password: Option<String>) -> Result<Zeroizing<String>> {
    match password {
        Some(p) => Ok(Zeroizing::new(p)),
        None => {
            let p = rpassword::prompt_password("Password: ")?;
            Ok(Zeroizing::new(p))
        }
    }
}

fn cmd_encrypt(input_path: &str, out_path: &str, password: &str) -> Result<()> {
    let data =
        std::fs::read(input_path).with_context(|| format!("read input file: {input_path}"))?;

    let filename = Path::new(input_path)
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("input path has no usable filename: {input_path}"))?;

    let blob = privkit::encrypt_file(&data, filename, password).context("encrypt failed")?;

    std::fs::write(out_path, &blob)
        .with_context(|| format!("write encrypted container: {out_path}"))?;

    println!(
        "OK: encrypted {} bytes as \"{}\" ({} byte container)",
        data.len(),
        filename,
        blob.len()
    );
    println!("Wrote: {out_path}");
    Ok(())
}

fn cmd_decrypt(input_path: &str, out_path: Option<&str>, password: &str) -> Result<()> {
    let blob =
        std::fs::read(input_path).with_context(|| format!("read container: {input_path}"))?;

    let decrypted = privkit::decrypt_file(&blob, password).context("decrypt failed")?;

    let out_path: PathBuf = match out_path {
        Some(p) => PathBuf::from(p),
        None => {
            if decrypted.filename.is_empty() {
                bail!("container has no filename; use --out to choose an output path");
            }
            // Recovered names are untrusted: keep only the final component.
            Path::new(&decrypted.filename)
                .file_name()
                .map(PathBuf::from)
                .with_context(|| {
                    format!("recovered filename is unusable: {:?}", decrypted.filename)
                })?
        }
    };

    std::fs::write(&out_path, &decrypted.data[..])
        .with_context(|| format!("write decrypted file: {}", out_path.display()))?;

    println!(
        "OK: decrypted {} bytes (filename \"{}\", type {})",
        decrypted.data.len(),
        decrypted.filename,
        decrypted.mime_type()
    );
    println!("Wrote: {}", out_path.display());
    Ok(())
}

fn cmd_hide(
    image_path: &str,
    out_path: &str,
    message: Option<&str>,
    message_file: Option<&str>,
) -> Result<()> {
    if message.is_some() && message_file.is_some() {
        bail!("Use either --message or --message-file, not both.");
    }
    let message: String = match (message, message_file) {
        (Some(m), _) => m.to_string(),
        (None, Some(p)) => std::fs::read_to_string(p)
            .with_context(|| format!("read message file: {p}"))?,
        (None, None) => bail!("Provide one of --message or --message-file."),
    };

    let carrier =
        Carrier::from_path(image_path).with_context(|| format!("load image: {image_path}"))?;

    let encoded = carrier.embed(&message).context("hide failed")?;
    encoded
        .save_png(out_path)
        .with_context(|| format!("write stego image: {out_path}"))?;

    println!(
        "OK: hid {} characters in {}x{} image (capacity {})",
        message.encode_utf16().count(),
        carrier.width(),
        carrier.height(),
        carrier.max_chars()
    );
    println!("Wrote: {out_path} (PNG — keep it lossless)");
    Ok(())
}

fn cmd_reveal(image_path: &str) -> Result<()> {
    let carrier =
        Carrier::from_path(image_path).with_context(|| format!("load image: {image_path}"))?;

    let message = carrier.extract();
    if message.is_empty() {
        println!("No hidden message found.");
    } else {
        println!("{message}");
    }
    Ok(())
}

fn cmd_capacity(image_path: &str) -> Result<()> {
    let carrier =
        Carrier::from_path(image_path).with_context(|| format!("load image: {image_path}"))?;

    println!(
        "{}x{} image: up to {} characters",
        carrier.width(),
        carrier.height(),
        carrier.max_chars()
    );
    Ok(())
}
