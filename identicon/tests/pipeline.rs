/// End-to-end tests: input bytes → PNG → decoded pixels.
use identicon::color::Color;
use identicon::pixel_map::PixelRect;
use identicon::render::BACKGROUND;
use identicon::{generate, Identicon, CANVAS_SIZE};

struct Decoded {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Decoded {
    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

fn decode(bytes: &[u8]) -> Decoded {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());
    Decoded {
        width: info.width,
        height: info.height,
        rgba: buf,
    }
}

#[test]
fn generate_is_deterministic() {
    for input in ["test", "", "alice", "bob", "héllo wörld"] {
        let a = generate(input.as_bytes()).unwrap();
        let b = generate(input.as_bytes()).unwrap();
        assert_eq!(a, b, "output for {input:?} differs between runs");
    }
}

#[test]
fn different_inputs_differ() {
    assert_ne!(generate(b"alice").unwrap(), generate(b"bob").unwrap());
}

#[test]
fn decoded_png_matches_pixel_map() {
    let icon = Identicon::new(b"test");
    let img = decode(&icon.to_png().unwrap());
    assert_eq!((img.width, img.height), (CANVAS_SIZE, CANVAS_SIZE));

    let fill = Color { r: 9, g: 143, b: 107 }.to_rgba();
    let painted: Vec<usize> = icon.grid.iter().map(|c| c.index).collect();

    // Sample the centre of every cell.
    for index in 0..25 {
        let rect = PixelRect::for_index(index);
        let (cx, cy) = (rect.top_left.x + 25, rect.top_left.y + 25);
        let expected = if painted.contains(&index) { fill } else { BACKGROUND };
        assert_eq!(img.pixel(cx, cy), expected, "cell {index}");
    }
}

#[test]
fn rendered_rgba_matches_decoded_png() {
    let icon = Identicon::new(b"alice");
    let rendered = icon.render();
    let decoded = decode(&icon.to_png().unwrap());
    assert_eq!(rendered.to_rgba(), decoded.rgba);
}

#[test]
fn image_is_horizontally_symmetric_by_cell() {
    let icon = Identicon::new(b"bob");
    let painted: Vec<usize> = icon.grid.iter().map(|c| c.index).collect();
    for &index in &painted {
        let (row, col) = (index / 5, index % 5);
        let mirrored = row * 5 + (4 - col);
        assert!(painted.contains(&mirrored), "cell {index} has no mirror");
    }
}

#[test]
fn all_odd_digest_paints_nothing() {
    // md5("empty-7384") has odd values in bytes 0..15 and an even byte 15.
    let icon = Identicon::new(b"empty-7384");
    assert_eq!(icon.digest.0[15] % 2, 0);
    assert!(icon.grid.is_empty());
    assert!(icon.pixel_map.is_empty());

    let img = decode(&icon.to_png().unwrap());
    assert!(img.rgba.chunks_exact(4).all(|p| p == BACKGROUND));
}
