use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use snakeboard_core::{BoardRenderer, DEFAULT_SQUARE_SIZE, GameDoc, StyleConfig, to_svg_document};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: snakeboard <board.json> <output.(svg|png)> [square_size] [style.json]");
        std::process::exit(2);
    }
    let input = &args[1];
    let output = &args[2];
    let square_size: f64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SQUARE_SIZE);
    let style: StyleConfig = match args.get(4) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => StyleConfig::default(),
    };

    let doc = GameDoc::from_json(&fs::read_to_string(input)?)?;
    let board = doc.into_board();
    board.validate()?;

    let renderer = BoardRenderer::with_square_size(style, square_size);
    let scene = renderer.render(&board)?;
    let svg = to_svg_document(&scene);

    if output.ends_with(".svg") {
        fs::write(output, svg)?;
        return Ok(());
    }

    // PNG: render SVG -> RGBA and save (deterministic)
    let mut opt = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    opt.fontdb = std::sync::Arc::new(fontdb);
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| format!("SVG parse error: {e:?}"))?;
    let w_px = scene.width.ceil() as u32;
    let h_px = scene.height.ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(w_px, h_px).ok_or("pixmap alloc failed")?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    encode_png_deterministic(&pixmap, output)?;
    Ok(())
}

fn encode_png_deterministic(
    pixmap: &tiny_skia::Pixmap,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path)?;
    let mut enc = Encoder::new(file, pixmap.width(), pixmap.height());
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    enc.set_filter(FilterType::NoFilter);
    enc.set_compression(Compression::Default);
    let mut writer = enc.write_header()?;
    writer.write_image_data(pixmap.data())?;
    Ok(())
}
