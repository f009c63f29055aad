use std::collections::HashMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::news::{Article, Source};

/// Articles bucketed by [`Source`], keyed in first-seen order.
///
/// Serializes as a JSON object whose keys are the compact JSON form of each
/// source, e.g. `{"{\"id\":\"bbc-news\",\"name\":\"BBC News\"}": [...]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    keys: Vec<Source>,
    groups: HashMap<Source, Vec<Article>>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, article: Article) {
        match self.groups.get_mut(&article.source) {
            Some(group) => group.push(article),
            None => {
                self.keys.push(article.source.clone());
                self.groups.insert(article.source.clone(), vec![article]);
            }
        }
    }

    pub fn get(&self, source: &Source) -> Option<&[Article]> {
        self.groups.get(source).map(Vec::as_slice)
    }

    pub fn sources(&self) -> &[Source] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Source, &[Article])> {
        self.keys
            .iter()
            .map(move |k| (k, self.groups[k].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn extend_group(&mut self, source: Source, articles: Vec<Article>) {
        match self.groups.get_mut(&source) {
            Some(group) => group.extend(articles),
            None => {
                self.keys.push(source.clone());
                self.groups.insert(source, articles);
            }
        }
    }
}

impl FromIterator<Article> for Grouping {
    fn from_iter<I: IntoIterator<Item = Article>>(iter: I) -> Self {
        let mut grouping = Self::new();
        for article in iter {
            grouping.push(article);
        }
        grouping
    }
}

impl Serialize for Grouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (source, articles) in self.iter() {
            let key = serde_json::to_string(source).map_err(ser::Error::custom)?;
            map.serialize_entry(&key, articles)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Grouping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupingVisitor;

        impl<'de> Visitor<'de> for GroupingVisitor {
            type Value = Grouping;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of serialized sources to article lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Grouping, A::Error> {
                let mut grouping = Grouping::new();
                while let Some((key, articles)) = access.next_entry::<String, Vec<Article>>()? {
                    let source: Source = serde_json::from_str(&key).map_err(de::Error::custom)?;
                    grouping.extend_group(source, articles);
                }
                Ok(grouping)
            }
        }

        deserializer.deserialize_map(GroupingVisitor)
    }
}
