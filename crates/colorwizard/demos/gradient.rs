use colorwizard::{
    find_hsl_colors_near_contrast, group_by, mix_oklch_linear, Color, WizardError,
};

fn main() -> Result<(), WizardError> {
    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(|| "#3366cc".to_string());
    let end = args.next().unwrap_or_else(|| "#ffcc00".to_string());

    println!("Oklch gradient from {} to {}:", start, end);
    for color in mix_oklch_linear(&start, &end, 7)? {
        println!("    {}", color);
    }

    // Candidates for text on white, grouped by hue.
    let candidates = find_hsl_colors_near_contrast(&start, 3.0, 4.5, 0.05, 0.0)?;
    let groups = group_by(candidates, |hsl| hsl.h.map(|h| h.round() as i32));
    let mut hues = groups.keys().copied().collect::<Vec<_>>();
    hues.sort();

    println!("\nColors with contrast 4.5 against white, near {}:", start);
    for hue in hues {
        let colors = &groups[&hue];
        let darkest = colors
            .iter()
            .map(|hsl| Color::from(*hsl))
            .min_by(|c1, c2| c1.relative_luminance().total_cmp(&c2.relative_luminance()));
        if let Some(color) = darkest {
            println!("    {:>3} candidates, e.g., {:.3}", colors.len(), color);
        }
    }

    Ok(())
}
