//! XML document format for the recipes file
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Recipes>
//!   <Recipe>
//!     <title>Carbonara</title>
//!     <description>Roman pasta</description>
//!     <Ingredients>
//!       <Ingredient>spaghetti</Ingredient>
//!     </Ingredients>
//!     <Procedure>
//!       <Step>Boil the pasta</Step>
//!     </Procedure>
//!     <Tags>
//!       <Tag>italian</Tag>
//!     </Tags>
//!   </Recipe>
//! </Recipes>
//! ```
//!
//! Reading goes through serde; every child of `<Recipe>` is optional.
//! Writing emits events directly so the layout stays stable.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;
use std::io::Write;

use super::error::LoadError;
use crate::recipe::Recipe;

const ROOT: &str = "Recipes";
const RECIPE: &str = "Recipe";

#[derive(Debug, Default, Deserialize)]
struct RecipesDocument {
    #[serde(rename = "Recipe", default)]
    recipes: Vec<RecipeRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct RecipeRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "Ingredients", default)]
    ingredients: Ingredients,
    #[serde(rename = "Procedure", default)]
    procedure: Procedure,
    #[serde(rename = "Tags", default)]
    tags: Tags,
}

#[derive(Debug, Default, Deserialize)]
struct Ingredients {
    #[serde(rename = "Ingredient", default)]
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Procedure {
    #[serde(rename = "Step", default)]
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Tags {
    #[serde(rename = "Tag", default)]
    items: Vec<String>,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Self::new(record.title, record.description)
            .with_ingredients(record.ingredients.items)
            .with_procedure(record.procedure.items)
            .with_tags(record.tags.items)
    }
}

/// Parse a recipes document
///
/// Recipes are returned in file order; duplicate titles are left for the
/// caller to resolve.
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the text is not a recipes document and
/// `LoadError::EmptyTitle` if any recipe has a blank title.
pub fn parse_document(text: &str) -> Result<Vec<Recipe>, LoadError> {
    let document: RecipesDocument = quick_xml::de::from_str(text)?;

    document
        .recipes
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let recipe = Recipe::from(record);
            if recipe.has_blank_title() {
                Err(LoadError::EmptyTitle { index })
            } else {
                Ok(recipe)
            }
        })
        .collect()
}

/// Encode recipes as a complete document, declaration included
///
/// # Errors
///
/// Returns an I/O error if the underlying writer fails.
pub fn write_document<'a, I>(recipes: I) -> std::io::Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new(ROOT)))?;
    for recipe in recipes {
        write_recipe(&mut xml, recipe)?;
    }
    xml.write_event(Event::End(BytesEnd::new(ROOT)))?;

    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_recipe<W: Write>(xml: &mut Writer<W>, recipe: &Recipe) -> std::io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(RECIPE)))?;
    write_text_element(xml, "title", &recipe.title)?;
    write_text_element(xml, "description", &recipe.description)?;
    write_list(xml, "Ingredients", "Ingredient", &recipe.ingredients)?;
    write_list(xml, "Procedure", "Step", &recipe.procedure)?;
    write_list(xml, "Tags", "Tag", recipe.tags())?;
    xml.write_event(Event::End(BytesEnd::new(RECIPE)))?;
    Ok(())
}

fn write_list<'a, W, I>(
    xml: &mut Writer<W>,
    wrapper: &str,
    item: &str,
    values: I,
) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a String>,
{
    xml.write_event(Event::Start(BytesStart::new(wrapper)))?;
    for value in values {
        write_text_element(xml, item, value)?;
    }
    xml.write_event(Event::End(BytesEnd::new(wrapper)))?;
    Ok(())
}

fn write_text_element<W: Write>(xml: &mut Writer<W>, name: &str, text: &str) -> std::io::Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
