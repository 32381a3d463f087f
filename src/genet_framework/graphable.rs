use anyhow::Result;
use layout::{
    adt::dag::NodeHandle,
    backends::svg::SVGWriter,
    core::{base::Orientation, color::Color, geometry::Point, style::StyleAttr},
    std_shapes::shapes::{Arrow, Element, ShapeKind},
    topo::layout::VisualGraph,
};
use svg2pdf::{ConversionOptions, PageOptions};

pub trait Graphable {
    fn to_dot(&self) -> Result<VisualGraph>;
}

impl dyn Graphable {
    pub fn create_place(graph: &mut VisualGraph, label: &str) -> NodeHandle {
        let shape = ShapeKind::new_circle(label);
        let look = StyleAttr::simple();
        let size = Point::new(40., 40.);
        let node = Element::create(shape, look, Orientation::LeftToRight, size);
        graph.add_node(node)
    }

    pub fn create_transition(graph: &mut VisualGraph, label: &str) -> NodeHandle {
        let shape = ShapeKind::new_box(label);
        let look = StyleAttr::simple();
        let size = Point::new(60., 30.);
        let node = Element::create(shape, look, Orientation::LeftToRight, size);
        graph.add_node(node)
    }

    pub fn create_silent_transition(graph: &mut VisualGraph) -> NodeHandle {
        let shape = ShapeKind::new_box("");
        let mut look = StyleAttr::simple();
        look.fill_color = Color::from_name("black");
        let size = Point::new(20., 30.);
        let node = Element::create(shape, look, Orientation::LeftToRight, size);
        graph.add_node(node)
    }

    pub fn create_edge(graph: &mut VisualGraph, from: &NodeHandle, to: &NodeHandle) {
        let arrow = Arrow::simple("");
        graph.add_edge(arrow, *from, *to);
    }
}

pub fn empty() -> String {
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?><svg width=\"352.5\" height=\"141\" viewBox=\"0 0 352.5 141\" xmlns=\"http://www.w3.org/2000/svg\"></svg>".to_string()
}

pub fn to_svg_string<T>(object: &T) -> Result<String>
where
    T: Graphable + ?Sized,
{
    let mut svg = SVGWriter::new();
    let mut graph = object.to_dot()?;
    Ok(if graph.num_nodes() == 0 {
        empty()
    } else {
        graph.do_it(false, false, false, &mut svg);
        svg.finalize()
    })
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &options)?;
    Ok(svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default()).unwrap())
}
