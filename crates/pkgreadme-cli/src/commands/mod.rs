pub mod package_readme;
