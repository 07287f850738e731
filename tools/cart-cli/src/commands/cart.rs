//! Cart commands.

use anyhow::Result;
use cart_core::{ProductId, UpdateProductAmount};

use super::{AddArgs, RemoveArgs, UpdateArgs};
use crate::context::{CliCartManager, Context};

/// Print the stored cart.
pub async fn show(ctx: &Context) -> Result<()> {
    let manager = ctx.cart_manager()?;
    print_cart(&manager, ctx);
    Ok(())
}

/// Add one unit of a product.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let manager = ctx.cart_manager()?;
    let product_id = ProductId::new(args.product_id);

    let spinner = ctx.output.spinner(&format!("Checking stock for product {}", product_id));
    manager.add_product(product_id).await;
    spinner.finish_and_clear();

    print_cart(&manager, ctx);
    Ok(())
}

/// Remove a product line.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let manager = ctx.cart_manager()?;
    manager.remove_product(ProductId::new(args.product_id));

    print_cart(&manager, ctx);
    Ok(())
}

/// Set a product's quantity.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let manager = ctx.cart_manager()?;
    let update = UpdateProductAmount {
        product_id: ProductId::new(args.product_id),
        amount: args.amount,
    };

    if update.amount <= 0 {
        ctx.output
            .debug("Non-positive quantity ignored; use `cart remove` to drop a product");
    }

    let spinner = ctx
        .output
        .spinner(&format!("Checking stock for product {}", update.product_id));
    manager.update_product_amount(update).await;
    spinner.finish_and_clear();

    print_cart(&manager, ctx);
    Ok(())
}

fn print_cart(manager: &CliCartManager, ctx: &Context) {
    ctx.output.header("Cart");
    ctx.output.cart(&manager.cart(), manager.locale());
}
